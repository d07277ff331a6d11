use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use lists::{DoublyLinkedList, ListError, parse_position};
use tracing::{debug, warn};

use crate::input::{Input, ask};

const MENU: &str = "\
Choose an operation:
1: insert at front
2: insert at index
3: insert at back
4: delete at index
0: quit";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Choice {
    Quit,
    InsertFront,
    InsertAt,
    InsertBack,
    DeleteAt,
}

impl FromStr for Choice {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>()? {
            0 => Ok(Choice::Quit),
            1 => Ok(Choice::InsertFront),
            2 => Ok(Choice::InsertAt),
            3 => Ok(Choice::InsertBack),
            4 => Ok(Choice::DeleteAt),
            n => Err(ListError::InvalidInput(format!("no menu entry {}", n))),
        }
    }
}

pub fn run<I>(seed: &[i32], input: &mut I, out: &mut impl Write) -> Result<()>
where
    I: Input + ?Sized,
{
    let mut list = DoublyLinkedList::new();
    for value in seed {
        list.push_back(*value);
    }
    writeln!(out, "\n[initial list] {}", list)?;

    loop {
        writeln!(out, "\n[current list] {}\n", list)?;
        writeln!(out, "{}", MENU)?;

        let Some(line) = input.read_line("choice> ")? else {
            break;
        };
        let choice = match line.parse::<Choice>() {
            Ok(choice) => choice,
            Err(err) => {
                debug!(%err, "bad menu choice");
                writeln!(out, "Invalid choice.")?;
                continue;
            }
        };

        match choice {
            Choice::Quit => break,
            Choice::InsertFront => {
                let Some(value) = ask::<i32, _>(input, "value to insert at front> ", out)? else {
                    break;
                };
                list.push_front(value);
            }
            Choice::InsertBack => {
                let Some(value) = ask::<i32, _>(input, "value to insert at back> ", out)? else {
                    break;
                };
                list.push_back(value);
            }
            Choice::InsertAt => {
                let Some(value) = ask::<i32, _>(input, "value to insert> ", out)? else {
                    break;
                };
                let Some(line) = input.read_line("index> ")? else {
                    break;
                };
                let inserted = parse_position(&line, list.len())
                    .and_then(|index| list.insert_at(value, index).map_err(|r| r.reason));
                if let Err(err) = inserted {
                    warn!(%err, "insert failed");
                    writeln!(out, "Invalid index.")?;
                }
            }
            Choice::DeleteAt => {
                let Some(line) = input.read_line("index to delete> ")? else {
                    break;
                };
                let removed =
                    parse_position(&line, list.len()).and_then(|index| list.remove_at(index));
                match removed {
                    Ok(value) => writeln!(out, "Deleted {}.", value)?,
                    Err(err) => {
                        warn!(%err, "delete failed");
                        writeln!(out, "Invalid index.")?;
                    }
                }
            }
        }
    }

    writeln!(out, "[final list] {}", list)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Script;

    fn session(lines: &[&str]) -> String {
        let mut input = Script::new(lines.iter().copied());
        let mut out = Vec::new();
        run(&[10, 20, 30], &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_choice() {
        assert_eq!("1".parse::<Choice>(), Ok(Choice::InsertFront));
        assert_eq!(" 0 ".parse::<Choice>(), Ok(Choice::Quit));
        assert!("9".parse::<Choice>().is_err());
        assert!("x".parse::<Choice>().is_err());
    }

    #[test]
    fn quit_right_away() {
        let text = session(&["0"]);
        assert!(text.starts_with("\n[initial list] 10 20 30 \n"));
        assert!(text.ends_with("[final list] 10 20 30 \n"));
    }

    #[test]
    fn insert_everywhere() {
        let text = session(&["1", "5", "2", "15", "2", "3", "35", "0"]);
        assert!(text.ends_with("[final list] 5 10 15 20 30 35 \n"));
    }

    #[test]
    fn bad_index_keeps_list() {
        let text = session(&["2", "99", "-1", "2", "99", "9", "4", "3", "0"]);
        assert_eq!(text.matches("Invalid index.").count(), 3);
        assert!(text.ends_with("[final list] 10 20 30 \n"));
    }

    #[test]
    fn delete_and_bad_choice() {
        let text = session(&["4", "1", "7", "abc", "0"]);
        assert!(text.contains("Deleted 20."));
        assert_eq!(text.matches("Invalid choice.").count(), 2);
        assert!(text.ends_with("[final list] 10 30 \n"));
    }

    #[test]
    fn input_ending_stops_the_menu() {
        let text = session(&["1"]);
        assert!(text.ends_with("[final list] 10 20 30 \n"));
    }
}
