//! Linked list exercises: a generic list driven by caller supplied
//! render/dispose behaviors, a friend list kept sorted by message count,
//! and a doubly linked list with positional insert and delete.

pub mod doubly;
pub mod error;
pub mod friends;
pub mod generic;

pub use doubly::DoublyLinkedList;
pub use error::{ListError, Rejected, Result, parse_position};
pub use friends::{Friend, FriendList};
pub use generic::{Dispose, Keyed, List, NoDispose, NoRender, Render, teardown};
