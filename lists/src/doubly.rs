use std::fmt;
use std::marker::PhantomData;
use std::ptr::{NonNull, null_mut};

use tracing::debug;

use crate::error::{ListError, Rejected, Result};

pub struct DoublyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
}

type Link<T> = *mut Node<T>;

struct Node<T> {
    elem: T,
    next: Link<T>,
    prev: Link<T>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: null_mut(),
            tail: null_mut(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.as_ref().map(|node| &node.elem) }
    }

    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|node| &node.elem) }
    }

    pub fn push_front(&mut self, elem: T) {
        let node = Box::into_raw(Box::new(Node {
            elem,
            next: self.head,
            prev: null_mut(),
        }));

        unsafe {
            if !self.head.is_null() {
                (*self.head).prev = node;
            } else {
                self.tail = node;
            }

            self.head = node;
        }
    }

    pub fn push_back(&mut self, elem: T) {
        let node = Box::into_raw(Box::new(Node {
            elem,
            next: null_mut(),
            prev: self.tail,
        }));

        unsafe {
            if !self.tail.is_null() {
                (*self.tail).next = node;
            } else {
                self.head = node;
            }

            self.tail = node;
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        unsafe {
            let node = NonNull::new(self.head)?;
            let boxed = Box::from_raw(node.as_ptr());
            self.head = boxed.next;

            if !self.head.is_null() {
                (*self.head).prev = null_mut();
            } else {
                self.tail = null_mut();
            }

            Some(boxed.elem)
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        unsafe {
            let node = NonNull::new(self.tail)?;
            let boxed = Box::from_raw(node.as_ptr());
            self.tail = boxed.prev;

            if !self.tail.is_null() {
                (*self.tail).next = null_mut();
            } else {
                self.head = null_mut();
            }

            Some(boxed.elem)
        }
    }

    /// Inserts `elem` at `index`, valid range `0..=len`.
    pub fn insert_at(&mut self, elem: T, index: usize) -> std::result::Result<(), Rejected<T>> {
        if index == 0 {
            self.push_front(elem);
            debug!(index, "inserted");
            return Ok(());
        }

        // 先走到插入位置的前一个节点
        let prev = self.node_at(index - 1);
        if prev.is_null() {
            let len = self.len();
            debug!(index, len, "insert rejected");
            return Err(Rejected::new(elem, ListError::position(index, len)));
        }

        unsafe {
            let next = (*prev).next;
            if next.is_null() {
                self.push_back(elem);
            } else {
                let node = Box::into_raw(Box::new(Node { elem, next, prev }));
                (*prev).next = node;
                (*next).prev = node;
            }
        }
        debug!(index, "inserted");
        Ok(())
    }

    /// Removes and returns the element at `index`, valid range `0..len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index);
        if node.is_null() {
            return Err(ListError::position(index, self.len()));
        }

        unsafe {
            let boxed = Box::from_raw(node);
            if boxed.prev.is_null() {
                self.head = boxed.next;
            } else {
                (*boxed.prev).next = boxed.next;
            }
            if boxed.next.is_null() {
                self.tail = boxed.prev;
            } else {
                (*boxed.next).prev = boxed.prev;
            }
            debug!(index, "removed");
            Ok(boxed.elem)
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }

    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev {
            next: self.tail,
            _marker: PhantomData,
        }
    }

    // index 越界时返回空指针
    fn node_at(&self, index: usize) -> Link<T> {
        let mut node = self.head;
        for _ in 0..index {
            if node.is_null() {
                break;
            }
            node = unsafe { (*node).next };
        }
        node
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            write!(f, "{} ", elem)?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    next: *const Node<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            self.next.as_ref().map(|node| {
                self.next = node.next;
                &node.elem
            })
        }
    }
}

pub struct IterRev<'a, T> {
    next: *const Node<T>,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe {
            self.next.as_ref().map(|node| {
                self.next = node.prev;
                &node.elem
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> DoublyLinkedList<i32> {
        let mut list = DoublyLinkedList::new();
        list.push_back(10);
        list.push_back(20);
        list.push_back(30);
        list
    }

    fn forward(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    fn backward(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        list.iter_rev().copied().collect()
    }

    #[test]
    fn basics() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert!(list.is_empty());
    }

    #[test]
    fn insert_at_keeps_both_directions_linked() {
        let mut list = seeded();
        list.insert_at(5, 0).unwrap();
        list.insert_at(15, 2).unwrap();
        list.insert_at(35, 5).unwrap();

        assert_eq!(forward(&list), [5, 10, 15, 20, 30, 35]);
        assert_eq!(backward(&list), [35, 30, 20, 15, 10, 5]);
        assert_eq!(list.back(), Some(&35));
    }

    #[test]
    fn insert_out_of_range() {
        let mut list = seeded();
        let rejected = list.insert_at(99, 4).unwrap_err();
        assert_eq!(
            rejected.reason,
            ListError::InvalidPosition { position: 4, len: 3 }
        );
        assert_eq!(rejected.into_inner(), 99);
        assert_eq!(forward(&list), [10, 20, 30]);

        let mut empty = DoublyLinkedList::new();
        assert!(empty.insert_at(1, 1).is_err());
        empty.insert_at(1, 0).unwrap();
        assert_eq!(forward(&empty), [1]);
    }

    #[test]
    fn remove_at_head_middle_tail() {
        let mut list = seeded();
        list.push_back(40);

        assert_eq!(list.remove_at(1), Ok(20));
        assert_eq!(backward(&list), [40, 30, 10]);
        assert_eq!(list.remove_at(0), Ok(10));
        assert_eq!(list.front(), Some(&30));
        assert_eq!(list.remove_at(1), Ok(40));
        assert_eq!(list.back(), Some(&30));
        assert_eq!(list.remove_at(0), Ok(30));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list = seeded();
        assert_eq!(
            list.remove_at(3),
            Err(ListError::InvalidPosition { position: 3, len: 3 })
        );
        assert_eq!(forward(&list), [10, 20, 30]);

        let mut empty: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert!(empty.remove_at(0).is_err());
    }

    #[test]
    fn display() {
        let list = seeded();
        assert_eq!(list.to_string(), "10 20 30 ");
    }

    #[test]
    fn drop_owned_elements() {
        let mut list = DoublyLinkedList::new();
        for i in 0..1000 {
            list.push_back(i.to_string());
        }
        drop(list)
    }
}
