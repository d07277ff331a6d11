use std::fmt;

use tracing::debug;

use crate::error::{ListError, Result};

/// Longest name kept, in bytes. Longer names are cut at a character boundary.
pub const MAX_NAME_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    pub name: String,
    pub count: u32,
}

impl Friend {
    pub fn new(name: &str, count: u32) -> Self {
        Friend {
            name: truncate_name(name).to_string(),
            count,
        }
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} {} }}", self.name, self.count)
    }
}

fn truncate_name(name: &str) -> &str {
    if name.len() <= MAX_NAME_LEN {
        return name;
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

type Link = Option<Box<Node>>;

struct Node {
    friend: Friend,
    next: Link,
}

/// Friends ordered by message count, highest first.
pub struct FriendList {
    head: Link,
}

impl Default for FriendList {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendList {
    pub fn new() -> Self {
        FriendList { head: None }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts keeping the order. A friend with the same count as existing
    /// ones goes in front of them.
    pub fn insert(&mut self, name: &str, count: u32) {
        let friend = Friend::new(name, count);

        // 新节点排在所有 count 严格更大的节点之后
        let position = self.iter().take_while(|f| f.count > count).count();
        let Some(link) = self.link_at(position) else {
            return;
        };

        let next = link.take();
        debug!(name = %friend.name, count, "friend inserted");
        *link = Some(Box::new(Node { friend, next }));
    }

    /// Deletes the first friend called `name`.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.head.is_none() {
            return Err(ListError::NotFound);
        }

        let position = self
            .iter()
            .position(|friend| friend.name == name)
            .ok_or(ListError::NotFound)?;

        let link = self.link_at(position).ok_or(ListError::NotFound)?;
        let node = link.take().ok_or(ListError::NotFound)?;
        *link = node.next;
        debug!(name, position, "friend deleted");
        Ok(())
    }

    /// Frees every node. The list can be filled again afterwards.
    pub fn clear(&mut self) {
        let mut cur_link = self.head.take();
        while let Some(mut node) = cur_link {
            cur_link = node.next.take();
        }
        debug!("friend list cleared");
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn link_at(&mut self, position: usize) -> Option<&mut Link> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl Drop for FriendList {
    fn drop(&mut self) {
        let mut cur_link = self.head.take();
        while let Some(mut node) = cur_link {
            cur_link = node.next.take();
        }
    }
}

impl fmt::Display for FriendList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for friend in self.iter() {
            write!(f, "{} ", friend)?;
        }
        write!(f, "]")
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Friend;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.friend
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twice() -> FriendList {
        let mut list = FriendList::new();
        list.insert("Dahyun", 200);
        list.insert("Jeongyeon", 150);
        list.insert("Tzuyu", 90);
        list.insert("Sana", 30);
        list.insert("Jihyo", 15);
        list
    }

    fn names(list: &FriendList) -> Vec<&str> {
        list.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn insert_keeps_descending_order() {
        let mut list = twice();
        list.insert("Mina", 40);
        assert_eq!(
            names(&list),
            ["Dahyun", "Jeongyeon", "Tzuyu", "Mina", "Sana", "Jihyo"]
        );

        list.insert("Small", 1);
        assert_eq!(names(&list).last(), Some(&"Small"));
    }

    #[test]
    fn equal_count_goes_first() {
        let mut list = twice();
        list.insert("Hyeri", 200);
        assert_eq!(names(&list)[..2], ["Hyeri", "Dahyun"]);

        list.insert("Nayeon", 90);
        assert_eq!(names(&list)[3..5], ["Nayeon", "Tzuyu"]);
    }

    #[test]
    fn delete_head_middle_and_missing() {
        let mut list = twice();
        list.insert("Hyeri", 200);

        assert_eq!(list.delete("Sana"), Ok(()));
        assert_eq!(list.delete("Hyeri"), Ok(()));
        assert_eq!(list.delete("Nobody"), Err(ListError::NotFound));
        assert_eq!(names(&list), ["Dahyun", "Jeongyeon", "Tzuyu", "Jihyo"]);
    }

    #[test]
    fn display_format() {
        let mut list = FriendList::new();
        assert_eq!(list.to_string(), "[ ]");
        list.insert("Dahyun", 200);
        list.insert("Sana", 30);
        assert_eq!(list.to_string(), "[ { Dahyun 200 } { Sana 30 } ]");
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = twice();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.delete("Sana"), Err(ListError::NotFound));

        list.insert("Dahyun", 10);
        assert_eq!(list.len(), 1);
        list.clear();
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn long_names_are_truncated() {
        let friend = Friend::new("abcdefghijklmnopqrstuvwxyz", 1);
        assert_eq!(friend.name, "abcdefghijklmnopqrs");

        // 3-byte characters: 6 of them fit in 19 bytes
        let friend = Friend::new("다현다현다현다현", 1);
        assert_eq!(friend.name, "다현다현다현");
    }
}
