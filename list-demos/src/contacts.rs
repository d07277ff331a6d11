use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use lists::{Keyed, List, ListError, NoRender, parse_position, teardown};
use tracing::{debug, info, warn};

use crate::input::{Input, ask};

const MENU: &str = "\
Choose an operation:
1: add at end
2: add at position
3: remove by name
4: print
5: clear
0: quit";

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str) -> Self {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl Keyed for Contact {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

fn render(contact: &Contact) -> String {
    format!("{{ {} {} }}", contact.name, contact.phone)
}

fn release(contact: Contact) {
    debug!(name = %contact.name, "contact released");
}

type Contacts = List<Contact, NoRender<Contact>, fn(Contact)>;

fn contacts() -> Contacts {
    List::new(Some(render as NoRender<Contact>), Some(release as fn(Contact)))
}

/// push A, push B, insert C at 1, remove A, remove Z, teardown.
pub fn scenario(out: &mut impl Write) -> Result<()> {
    let mut handle = Some(contacts());

    if let Some(list) = handle.as_mut() {
        list.push_back(Contact::new("A", "010-1111"));
        list.push_back(Contact::new("B", "010-2222"));
        if let Err(rejected) = list.insert_at(Contact::new("C", "010-3333"), 1) {
            writeln!(out, "insert failed: {}", rejected)?;
        }
        list.write_to(out)?;

        for name in ["A", "Z"] {
            match list.remove_by_key(name) {
                Ok(()) => writeln!(out, "removed {}", name)?,
                Err(err) => writeln!(out, "could not remove {}: {}", name, err)?,
            }
            list.write_to(out)?;
        }
    }

    teardown(&mut handle);
    let size = handle.as_ref().map_or(0, |list| list.len());
    info!(size, "generic list torn down");
    writeln!(out, "after teardown: size {}", size)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Choice {
    Quit,
    AddEnd,
    AddAt,
    Remove,
    Print,
    Clear,
}

impl FromStr for Choice {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>()? {
            0 => Ok(Choice::Quit),
            1 => Ok(Choice::AddEnd),
            2 => Ok(Choice::AddAt),
            3 => Ok(Choice::Remove),
            4 => Ok(Choice::Print),
            5 => Ok(Choice::Clear),
            n => Err(ListError::InvalidInput(format!("no menu entry {}", n))),
        }
    }
}

fn read_contact<I>(input: &mut I) -> Result<Option<Contact>>
where
    I: Input + ?Sized,
{
    let Some(name) = input.read_line("name> ")? else {
        return Ok(None);
    };
    let Some(phone) = input.read_line("phone> ")? else {
        return Ok(None);
    };
    Ok(Some(Contact::new(name.trim(), phone.trim())))
}

pub fn run<I>(input: &mut I, out: &mut impl Write) -> Result<()>
where
    I: Input + ?Sized,
{
    let mut list = contacts();

    loop {
        writeln!(out, "\n{}", MENU)?;
        let Some(choice) = ask::<Choice, _>(input, "choice> ", out)? else {
            break;
        };

        match choice {
            Choice::Quit => break,
            Choice::AddEnd => {
                let Some(contact) = read_contact(input)? else {
                    break;
                };
                list.push_back(contact);
            }
            Choice::AddAt => {
                let Some(contact) = read_contact(input)? else {
                    break;
                };
                let Some(line) = input.read_line("position> ")? else {
                    break;
                };
                let result = match parse_position(&line, list.len()) {
                    Ok(position) => list.insert_at(contact, position),
                    Err(err) => Err(lists::Rejected::new(contact, err)),
                };
                if let Err(rejected) = result {
                    warn!(reason = %rejected.reason, "contact not added");
                    writeln!(out, "Invalid position: {} was not added.", rejected.elem.name)?;
                }
            }
            Choice::Remove => {
                let Some(name) = input.read_line("name to remove> ")? else {
                    break;
                };
                match list.remove_by_key(name.trim()) {
                    Ok(()) => writeln!(out, "'{}' removed.", name.trim())?,
                    Err(_) => writeln!(out, "'{}' not found.", name.trim())?,
                }
            }
            Choice::Print => list.write_to(out)?,
            Choice::Clear => {
                list.clear();
                writeln!(out, "All contacts removed.")?;
            }
        }
    }

    Ok(())
}
