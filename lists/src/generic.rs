/*
通用单链表：链表本身不关心元素的内部结构，
如何显示（Render）和如何释放（Dispose）由调用者在创建链表时提供。

1、元素在插入成功时所有权转移给链表；插入失败时通过 Rejected 原样还给调用者。
2、长度每次都通过遍历计算，没有额外的计数字段。
*/

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::{ListError, Rejected, Result};

/// How an element is shown by [`List::write_to`]. Must only read the element.
pub trait Render<T> {
    fn render(&self, elem: &T) -> String;
}

impl<T, F> Render<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, elem: &T) -> String {
        self(elem)
    }
}

/// How an element's resources are released. Called exactly once per element,
/// after the element is no longer reachable from the list.
pub trait Dispose<T> {
    fn dispose(&mut self, elem: T);
}

impl<T, F> Dispose<T> for F
where
    F: FnMut(T),
{
    fn dispose(&mut self, elem: T) {
        self(elem)
    }
}

/// Behavior types to name when a list is created without one.
pub type NoRender<T> = fn(&T) -> String;
pub type NoDispose<T> = fn(T);

/// Elements that can be looked up by a designated key field.
pub trait Keyed {
    type Key: ?Sized + PartialEq;

    fn key(&self) -> &Self::Key;
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

pub struct List<T, R, D>
where
    R: Render<T>,
    D: Dispose<T>,
{
    head: Link<T>,
    display: Option<R>,
    destroy: Option<D>,
}

impl<T, R, D> List<T, R, D>
where
    R: Render<T>,
    D: Dispose<T>,
{
    pub fn new(display: Option<R>, destroy: Option<D>) -> Self {
        List {
            head: None,
            display,
            destroy,
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The element at the entry point, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    pub fn push_front(&mut self, elem: T) {
        let new_node = Box::new(Node {
            elem,
            next: self.head.take(),
        });
        self.head = Some(new_node);
        debug!("inserted at front");
    }

    pub fn push_back(&mut self, elem: T) {
        let len = self.len();
        match self.link_at(len) {
            Some(link) => *link = Some(Box::new(Node { elem, next: None })),
            None => self.release(elem),
        }
        debug!(position = len, "inserted at end");
    }

    /// Inserts `elem` so that it ends up at `position`. Valid positions are
    /// `0..=len`; `len` appends. On failure the list is untouched and the
    /// element comes back inside the error.
    pub fn insert_at(&mut self, elem: T, position: usize) -> std::result::Result<(), Rejected<T>> {
        let len = self.len();
        if position > len {
            debug!(position, len, "insert rejected");
            return Err(Rejected::new(elem, ListError::position(position, len)));
        }

        // 找到第 position 个 link（即前驱节点的 next），在这里接入新节点
        match self.link_at(position) {
            Some(link) => {
                let next = link.take();
                *link = Some(Box::new(Node { elem, next }));
                debug!(position, "inserted");
                Ok(())
            }
            None => Err(Rejected::new(elem, ListError::position(position, len))),
        }
    }

    /// Removes the first element in chain order for which `pred` holds and
    /// hands it to the destroy behavior.
    pub fn remove_first<P>(&mut self, mut pred: P) -> Result<()>
    where
        P: FnMut(&T) -> bool,
    {
        if self.head.is_none() {
            return Err(ListError::NotFound);
        }

        let position = self
            .iter()
            .position(|elem| pred(elem))
            .ok_or(ListError::NotFound)?;
        let elem = self.unlink(position).ok_or(ListError::NotFound)?;
        self.release(elem);
        debug!(position, "removed");
        Ok(())
    }

    pub fn remove_by_key(&mut self, key: &T::Key) -> Result<()>
    where
        T: Keyed,
    {
        self.remove_first(|elem| elem.key() == key)
    }

    /// Removes the element at `position`, valid range `0..len`.
    pub fn remove_at(&mut self, position: usize) -> Result<()> {
        let len = self.len();
        if position >= len {
            return Err(ListError::position(position, len));
        }

        let elem = self
            .unlink(position)
            .ok_or_else(|| ListError::position(position, len))?;
        self.release(elem);
        debug!(position, "removed");
        Ok(())
    }

    /// Writes every element between `[ ` and `]`, in chain order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(display) = self.display.as_ref() else {
            return writeln!(out, "no display behavior set");
        };
        if self.head.is_none() {
            return writeln!(out, "[ empty ]");
        }

        write!(out, "[ ")?;
        for elem in self.iter() {
            write!(out, "{} ", display.render(elem))?;
        }
        writeln!(out, "]")
    }

    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Releases every element through the destroy behavior, head to tail.
    /// Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        let mut cur_link = self.head.take();
        let mut released = 0usize;
        while let Some(node) = cur_link {
            let Node { elem, next } = *node;
            cur_link = next;
            self.release(elem);
            released += 1;
        }
        if released > 0 {
            debug!(released, "list cleared");
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    // 返回指向第 position 个节点的 link；position == len 时是末尾的 None
    fn link_at(&mut self, position: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn unlink(&mut self, position: usize) -> Option<T> {
        let link = self.link_at(position)?;
        let node = link.take()?;
        let Node { elem, next } = *node;
        *link = next;
        Some(elem)
    }

    fn release(&mut self, elem: T) {
        trace!("releasing element");
        match self.destroy.as_mut() {
            Some(destroy) => destroy.dispose(elem),
            None => drop(elem),
        }
    }
}

impl<T, R, D> Drop for List<T, R, D>
where
    R: Render<T>,
    D: Dispose<T>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

/// Tears the list down and leaves the caller's handle empty. A handle that
/// is already empty is left alone.
pub fn teardown<T, R, D>(list: &mut Option<List<T, R, D>>)
where
    R: Render<T>,
    D: Dispose<T>,
{
    if let Some(mut list) = list.take() {
        list.clear();
        debug!("list torn down");
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}
