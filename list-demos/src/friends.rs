use std::io::Write;

use anyhow::Result;
use lists::FriendList;
use tracing::info;

const INITIAL: [(&str, u32); 5] = [
    ("Dahyun", 200),
    ("Jeongyeon", 150),
    ("Tzuyu", 90),
    ("Sana", 30),
    ("Jihyo", 15),
];

pub fn run(out: &mut impl Write) -> Result<()> {
    let mut list = FriendList::new();
    for (name, count) in INITIAL {
        list.insert(name, count);
    }
    info!(friends = list.len(), "friend list seeded");

    writeln!(out, "Initial friends:")?;
    writeln!(out, "{}\n", list)?;

    add(&mut list, "Mina", 40, out)?;
    add(&mut list, "Hyeri", 200, out)?;

    delete(&mut list, "Sana", out)?;
    delete(&mut list, "Hyeri", out)?;
    delete(&mut list, "Nobody", out)?;

    writeln!(out, "--- deleting every friend ---")?;
    list.clear();
    writeln!(out, "After clearing:")?;
    writeln!(out, "{}\n", list)?;

    writeln!(out, "Adding again after clearing:")?;
    list.insert("Dahyun", 10);
    writeln!(out, "{}\n", list)?;

    Ok(())
}

fn add(list: &mut FriendList, name: &str, count: u32, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Friend to add --> {}", name)?;
    writeln!(out, "Message count --> {}", count)?;
    list.insert(name, count);
    writeln!(out, "{}\n", list)?;
    Ok(())
}

fn delete(list: &mut FriendList, name: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Friend to delete --> {}", name)?;
    match list.delete(name) {
        Ok(()) => writeln!(out, "'{}' deleted.", name)?,
        Err(_) => writeln!(out, "'{}' not found.", name)?,
    }
    writeln!(out, "{}\n", list)?;
    Ok(())
}
