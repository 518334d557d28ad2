//! This crate provides a doubly-linked list with stable node handles,
//! implemented as a cyclic ring of nodes stored in a slab arena.
//!
//! The [`List`] allows inserting, removing and relocating elements at any
//! given position in constant time, addressed through copyable [`NodeRef`]
//! handles. Searching for an element takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! let node = list.find(&2).unwrap();
//! list.insert_after(4, node); // becomes [1, 2, 4, 3]
//! assert_eq!(list.values(), vec![1, 2, 4, 3]);
//!
//! let back = list.back().unwrap();
//! list.move_to_front(back); // becomes [3, 1, 2, 4]
//! assert_eq!(list.values(), vec![3, 1, 2, 4]);
//!
//! assert_eq!(list.remove(node), Some(2));
//! assert_eq!(list.remove(node), None); // stale handles are rejected
//! ```
//!
//! # Memory Layout
//!
//! All nodes, including the sentinel, live in a single [`slab`] arena owned
//! by the list. Links are slab keys rather than pointers:
//!
//! ```text
//!          ┌──────────────────────────────────────────────────────────┐
//!          ↓                                              sentinel    │
//!    ╔═══════════╗         ╔═══════════╗                ┌───────────┐ │
//!    ║   next    ║ ──────→ ║   next    ║ ──→ ┄┄ ──────→ │   next    │─┘
//!    ╟───────────╢         ╟───────────╢                ├───────────┤
//! ┌─ ║   prev    ║ ←────── ║   prev    ║ ←── ┄┄ ←────── │   prev    │
//! │  ╟───────────╢         ╟───────────╢                ├───────────┤
//! │  ║ payload T ║         ║ payload T ║                ┊no payload ┊
//! │  ╚═══════════╝         ╚═══════════╝                └╌╌╌╌╌╌╌╌╌╌╌┘
//! │     node 0                node 1                        ↑   ↑
//! └─────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                 │
//! ║ sentinel  ║ ────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! The sentinel is a permanently present node with no payload. Its `next` is
//! the logical front of the list and its `prev` is the logical back; in an
//! empty list it links to itself in both directions. Because every boundary
//! is the sentinel, insertion and removal never special-case the ends.
//!
//! # Node Handles
//!
//! Mutating operations return a [`NodeRef`], a copyable handle naming the
//! inserted node. A handle stays valid until its node is removed or the list
//! is cleared; after that, every operation targeting it returns `None`
//! instead of corrupting the ring. Handles also remember which list issued
//! them, so using a handle against a different [`List`] instance is rejected
//! the same way.
//!
//! ```
//! use ring_list::List;
//!
//! let mut list = List::new();
//! let node = list.push_back(7);
//!
//! let mut other: List<i32> = List::new();
//! assert_eq!(other.remove(node), None); // wrong list
//! assert_eq!(list.remove(node), Some(7));
//! ```
//!
//! # Traversal
//!
//! [`next`] and [`prev`] step through the ring one node at a time, returning
//! `None` when the step would land on the sentinel. They consult the current
//! state of the ring at every call, so a traversal keeps working while
//! *other* nodes are inserted or removed around it:
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut node = list.front();
//! while let Some(n) = node {
//!     print!("{} ", list.get(n).unwrap());
//!     node = list.next(n);
//! }
//! ```
//!
//! Removing the node a traversal currently holds makes its handle stale, so
//! the next step returns `None` and the traversal ends early. Capture the
//! successor *before* removing when that is not what you want.
//!
//! For whole-list iteration the borrowing [`Iter`] (double-ended) and the
//! owning [`IntoIter`] are cheaper and cannot observe mutation at all.
//!
//! [`next`]: List::next
//! [`prev`]: List::prev

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{List, NodeRef};

pub mod list;
