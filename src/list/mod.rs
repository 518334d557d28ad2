use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;

use crate::Iter;

pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with stable node handles, implemented
/// as a cyclic ring of nodes stored in a slab arena. It allows inserting,
/// removing and relocating elements at any given position in constant time.
/// In compromise, searching for an element takes *O*(*n*) time.
///
/// The `List` contains:
/// - a slab arena `slots` owning every node, the sentinel included;
/// - the slab key `sentinel` of the sentinel node;
/// - a list identity `id`, unique per instance, stored in every issued
///   [`NodeRef`] so that handles from another list are rejected;
/// - a stamp counter, advanced on every insertion and never reset, so that
///   handles to removed nodes are rejected even when the slab reuses a slot;
/// - a length field `len` counting the payload-bearing nodes.
pub struct List<T> {
    pub(crate) slots: Slab<Node<T>>,
    pub(crate) sentinel: usize,
    id: u64,
    stamp: u64,
    len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) stamp: u64,
    /// `None` only for the sentinel.
    pub(crate) element: Option<T>,
}

/// A copyable handle to a node of a [`List`].
///
/// A `NodeRef` names a node without borrowing the list, so it can be held
/// across arbitrary mutations. It is validated every time it is used: once
/// the node is removed (or the list cleared, or the handle presented to a
/// different list), operations taking the handle return `None`.
///
/// Handles compare equal exactly when they name the same insertion of the
/// same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: u64,
    key: usize,
    stamp: u64,
}

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

// The sentinel keeps stamp 0, which is never issued to callers, so no
// `NodeRef` can ever name it.
const SENTINEL_STAMP: u64 = 0;

// private methods
impl<T> List<T> {
    fn with_slots(mut slots: Slab<Node<T>>) -> Self {
        let entry = slots.vacant_entry();
        let sentinel = entry.key();
        entry.insert(Node {
            next: sentinel,
            prev: sentinel,
            stamp: SENTINEL_STAMP,
            element: None,
        });
        Self {
            slots,
            sentinel,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            stamp: SENTINEL_STAMP,
            len: 0,
        }
    }

    /// Resolve a handle to its slab key, or `None` if the handle was issued
    /// by another list, names a removed node, or survived a `clear`.
    fn resolve(&self, node: NodeRef) -> Option<usize> {
        if node.list != self.id {
            return None;
        }
        match self.slots.get(node.key) {
            Some(slot) if slot.stamp == node.stamp => Some(node.key),
            _ => None,
        }
    }

    fn handle(&self, key: usize) -> NodeRef {
        NodeRef {
            list: self.id,
            key,
            stamp: self.slots[key].stamp,
        }
    }

    /// Point `prev` and `next` at each other.
    fn connect(&mut self, prev: usize, next: usize) {
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Allocate a node holding `value` and link it immediately after `at`.
    /// Four link writes; the caller guarantees `at` is a key of this ring.
    fn insert_at(&mut self, value: T, at: usize) -> usize {
        self.stamp += 1;
        let next = self.slots[at].next;
        let key = self.slots.insert(Node {
            next,
            prev: at,
            stamp: self.stamp,
            element: Some(value),
        });
        self.slots[at].next = key;
        self.slots[next].prev = key;
        self.len += 1;
        key
    }

    /// Unlink `key` from the ring, free its slot and return its payload.
    /// The caller guarantees `key` is a live, non-sentinel key of this ring.
    fn detach(&mut self, key: usize) -> T {
        let node = self.slots.remove(key);
        self.connect(node.prev, node.next);
        self.len -= 1;
        node.element.expect("the sentinel is never detached")
    }

    /// Splice `key` out of the ring and back in immediately after `at`,
    /// without freeing the slot or touching `len`. A no-op if `key == at`.
    fn splice(&mut self, key: usize, at: usize) {
        if key == at {
            return;
        }
        let (prev, next) = {
            let node = &self.slots[key];
            (node.prev, node.next)
        };
        self.connect(prev, next);
        let next = self.slots[at].next;
        self.connect(at, key);
        self.connect(key, next);
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_slots(Slab::new())
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_slots(Slab::with_capacity(capacity + 1))
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `List` and invalidates every handle it
    /// has issued. Handles held from before the call are rejected by all
    /// subsequent operations.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time (every payload must be
    /// dropped).
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let node = list.push_back(1);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.remove(node), None);
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        let entry = self.slots.vacant_entry();
        let sentinel = entry.key();
        entry.insert(Node {
            next: sentinel,
            prev: sentinel,
            stamp: SENTINEL_STAMP,
            element: None,
        });
        self.sentinel = sentinel;
        self.len = 0;
        // `self.stamp` is deliberately not reset: reused slots get fresh
        // stamps, so pre-clear handles keep failing the stamp check.
    }

    /// Returns a handle to the front node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// let node = list.push_front(1);
    /// assert_eq!(list.front(), Some(node));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<NodeRef> {
        if self.is_empty() {
            return None;
        }
        Some(self.handle(self.slots[self.sentinel].next))
    }

    /// Returns a handle to the back node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// let node = list.push_back(1);
    /// assert_eq!(list.back(), Some(node));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<NodeRef> {
        if self.is_empty() {
            return None;
        }
        Some(self.handle(self.slots[self.sentinel].prev))
    }

    /// Provides a reference to the value of `node`, or `None` if the handle
    /// is stale or from another list.
    #[inline]
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        let key = self.resolve(node)?;
        self.slots[key].element.as_ref()
    }

    /// Provides a mutable reference to the value of `node`, or `None` if the
    /// handle is stale or from another list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let node = list.push_back(1);
    ///
    /// *list.get_mut(node).unwrap() = 5;
    /// assert_eq!(list.get(node), Some(&5));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        let key = self.resolve(node)?;
        self.slots[key].element.as_mut()
    }

    /// Returns a handle to the node following `node` in ring order, or
    /// `None` if `node` is the current back or its handle is no longer
    /// valid.
    ///
    /// The boundary is checked against the ring as it is *now*, not as it
    /// was when `node` was obtained, so a traversal stays correct while
    /// other nodes are inserted or removed around it. Removing `node` itself
    /// makes the handle stale and ends the traversal; capture the successor
    /// first when that is not intended.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let front = list.front().unwrap();
    /// let back = list.next(front).unwrap();
    /// assert_eq!(list.get(back), Some(&2));
    /// assert_eq!(list.next(back), None);
    /// ```
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        let next = self.slots[key].next;
        if next == self.sentinel {
            None
        } else {
            Some(self.handle(next))
        }
    }

    /// Returns a handle to the node preceding `node` in ring order, or
    /// `None` if `node` is the current front or its handle is no longer
    /// valid.
    ///
    /// Like [`next`], the boundary is checked against the current ring at
    /// call time.
    ///
    /// [`next`]: List::next
    pub fn prev(&self, node: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        let prev = self.slots[key].prev;
        if prev == self.sentinel {
            None
        } else {
            Some(self.handle(prev))
        }
    }

    /// Returns a handle to the first node holding a value equal to `value`,
    /// scanning forward from the front, or `None` if there is no match.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 1]);
    /// let node = list.find(&1).unwrap();
    /// assert_eq!(list.prev(node), None); // first occurrence
    /// assert_eq!(list.find(&3), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut key = self.slots[self.sentinel].next;
        while key != self.sentinel {
            let node = &self.slots[key];
            if node.element.as_ref() == Some(value) {
                return Some(self.handle(key));
            }
            key = node.next;
        }
        None
    }

    /// Returns a handle to the last node holding a value equal to `value`,
    /// scanning backward from the back, or `None` if there is no match.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 1]);
    /// let node = list.find_last(&1).unwrap();
    /// assert_eq!(list.next(node), None); // last occurrence
    /// ```
    pub fn find_last(&self, value: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut key = self.slots[self.sentinel].prev;
        while key != self.sentinel {
            let node = &self.slots[key];
            if node.element.as_ref() == Some(value) {
                return Some(self.handle(key));
            }
            key = node.prev;
        }
        None
    }

    /// Pushes every value of `values` to the back of the list, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.append(vec![1, 2]);
    /// list.append(Some(3));
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().for_each(|value| {
            self.push_back(value);
        });
    }

    /// Adds an element first in the list and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// let node = list.push_front(1);
    /// assert_eq!(list.front(), Some(node));
    /// assert_eq!(list.values(), vec![1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let key = self.insert_at(value, self.sentinel);
        self.handle(key)
    }

    /// Appends an element to the back of the list and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// let node = list.push_back(3);
    /// assert_eq!(list.back(), Some(node));
    /// ```
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let at = self.slots[self.sentinel].prev;
        let key = self.insert_at(value, at);
        self.handle(key)
    }

    /// Inserts a new node holding `value` immediately after `at` and returns
    /// its handle, or `None` if `at` is stale or from another list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let at = list.find(&1).unwrap();
    /// list.insert_after(2, at);
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, value: T, at: NodeRef) -> Option<NodeRef> {
        let at = self.resolve(at)?;
        let key = self.insert_at(value, at);
        Some(self.handle(key))
    }

    /// Inserts a new node holding `value` immediately before `at` and
    /// returns its handle, or `None` if `at` is stale or from another list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let at = list.find(&3).unwrap();
    /// list.insert_before(2, at);
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn insert_before(&mut self, value: T, at: NodeRef) -> Option<NodeRef> {
        let at = self.resolve(at)?;
        let prev = self.slots[at].prev;
        let key = self.insert_at(value, prev);
        Some(self.handle(key))
    }

    /// Removes the first element and returns its value, or `None` if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.slots[self.sentinel].next;
        Some(self.detach(front))
    }

    /// Removes the last element and returns its value, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.slots[self.sentinel].prev;
        Some(self.detach(back))
    }

    /// Detaches `node` from the ring and returns its value, or `None` if the
    /// handle is stale or from another list. The handle (and every copy of
    /// it) is stale afterwards.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let node = list.find(&2).unwrap();
    ///
    /// assert_eq!(list.remove(node), Some(2));
    /// assert_eq!(list.remove(node), None);
    /// assert_eq!(list.values(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, node: NodeRef) -> Option<T> {
        let key = self.resolve(node)?;
        Some(self.detach(key))
    }

    /// Relocates `node` to the logical front and returns its handle, or
    /// `None` if the handle is stale or from another list. The handle stays
    /// valid across the move.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let back = list.back().unwrap();
    /// list.move_to_front(back);
    /// assert_eq!(list.values(), vec![3, 1, 2]);
    /// ```
    pub fn move_to_front(&mut self, node: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        self.splice(key, self.sentinel);
        Some(node)
    }

    /// Relocates `node` to the logical back and returns its handle, or
    /// `None` if the handle is stale or from another list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let front = list.front().unwrap();
    /// list.move_to_back(front);
    /// assert_eq!(list.values(), vec![2, 3, 1]);
    /// ```
    pub fn move_to_back(&mut self, node: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        let back = self.slots[self.sentinel].prev;
        self.splice(key, back);
        Some(node)
    }

    /// Relocates `node` to immediately after `at` and returns `node`, or
    /// `None` if either handle is stale or from another list. A no-op when
    /// `node == at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_after(&mut self, node: NodeRef, at: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        let at = self.resolve(at)?;
        self.splice(key, at);
        Some(node)
    }

    /// Relocates `node` to immediately before `at` and returns `node`, or
    /// `None` if either handle is stale or from another list. A no-op when
    /// `node == at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn move_before(&mut self, node: NodeRef, at: NodeRef) -> Option<NodeRef> {
        let key = self.resolve(node)?;
        let at = self.resolve(at)?;
        let prev = self.slots[at].prev;
        self.splice(key, prev);
        Some(node)
    }

    /// Returns a snapshot of all values, front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Provides a forward iterator over the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    /// Walks the ring in both directions and checks it is consistent with
    /// `len` and `values`.
    fn assert_ring<T: Clone + Eq + std::fmt::Debug>(list: &List<T>, expected: &[T]) {
        assert_eq!(list.len(), expected.len());
        assert_eq!(list.is_empty(), expected.is_empty());
        assert_eq!(list.values(), expected.to_vec());

        let mut forward = Vec::new();
        let mut node = list.front();
        while let Some(n) = node {
            forward.push(list.get(n).unwrap().clone());
            node = list.next(n);
        }
        assert_eq!(forward, expected.to_vec());

        let mut backward = Vec::new();
        let mut node = list.back();
        while let Some(n) = node {
            backward.push(list.get(n).unwrap().clone());
            node = list.prev(n);
        }
        backward.reverse();
        assert_eq!(backward, expected.to_vec());
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_from_iter() {
        let expected = vec!["a", "b", "c"];
        let list = List::from_iter(expected.clone());
        assert_ring(&list, &expected);
    }

    #[test]
    fn list_append_and_insert() {
        let mut list = List::new();
        list.append(vec![1, 3]);
        list.push_front(0);
        list.push_back(5);
        list.insert_after(4, list.find(&3).unwrap());
        list.insert_before(2, list.find(&3).unwrap());

        assert_ring(&list, &[0, 1, 2, 3, 4, 5]);
        assert_eq!(list.get(list.front().unwrap()), Some(&0));
        assert_eq!(list.get(list.back().unwrap()), Some(&5));
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        let node = list.push_front(1);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(node), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_ring(&list, &[2, 1, 3]);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn list_remove() {
        let mut list = List::from_iter(vec![0, 1, 3, 2, 3, 4, 3, 5]);

        assert_eq!(list.remove(list.find_last(&3).unwrap()), Some(3));
        assert_eq!(list.remove(list.find(&3).unwrap()), Some(3));
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(5));

        assert_ring(&list, &[1, 2, 3, 4]);
    }

    #[test]
    fn list_remove_rejects_stale_and_foreign() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let node = list.find(&2).unwrap();
        assert_eq!(list.remove(node), Some(2));

        // the handle is stale now, in every role
        assert_eq!(list.remove(node), None);
        assert_eq!(list.get(node), None);
        assert_eq!(list.insert_after(9, node), None);
        assert_eq!(list.insert_before(9, node), None);
        assert_eq!(list.move_to_front(node), None);
        assert_eq!(list.move_after(list.front().unwrap(), node), None);
        assert_eq!(list.next(node), None);
        assert_eq!(list.prev(node), None);
        assert_ring(&list, &[1, 3]);

        // a handle from another list is rejected the same way
        let mut other = List::from_iter(vec![7]);
        let foreign = other.front().unwrap();
        assert_eq!(list.remove(foreign), None);
        assert_eq!(list.move_to_back(foreign), None);
        assert_eq!(list.insert_after(9, foreign), None);
        assert_ring(&list, &[1, 3]);
        assert_ring(&other, &[7]);
    }

    #[test]
    fn list_move() {
        let mut list = List::from_iter(vec![1, 2, 3]);

        let moved = list.move_to_front(list.back().unwrap()).unwrap();
        assert_eq!(list.get(moved), Some(&3));
        assert_ring(&list, &[3, 1, 2]);

        // back is already at the back, a no-op
        let moved = list.move_to_back(list.back().unwrap()).unwrap();
        assert_eq!(list.get(moved), Some(&2));
        assert_ring(&list, &[3, 1, 2]);

        let moved = list.move_to_back(list.find(&1).unwrap()).unwrap();
        assert_eq!(list.get(moved), Some(&1));
        assert_ring(&list, &[3, 2, 1]);

        let moved = list
            .move_after(list.find(&2).unwrap(), list.back().unwrap())
            .unwrap();
        assert_eq!(list.get(moved), Some(&2));
        assert_ring(&list, &[3, 1, 2]);

        let moved = list
            .move_before(list.find(&1).unwrap(), list.front().unwrap())
            .unwrap();
        assert_eq!(list.get(moved), Some(&1));
        assert_ring(&list, &[1, 3, 2]);
    }

    #[test]
    fn list_move_self_is_noop() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let node = list.find(&2).unwrap();

        assert_eq!(list.move_after(node, node), Some(node));
        assert_ring(&list, &[1, 2, 3]);

        assert_eq!(list.move_before(node, node), Some(node));
        assert_ring(&list, &[1, 2, 3]);

        // moving a node right after its predecessor keeps it in place
        let front = list.front().unwrap();
        assert_eq!(list.move_after(node, front), Some(node));
        assert_ring(&list, &[1, 2, 3]);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let front = list.front().unwrap();
        let back = list.back().unwrap();
        list.clear();

        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.find(&0), None);
        assert_eq!(list.find_last(&0), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        // pre-clear handles are rejected everywhere
        assert_eq!(list.remove(front), None);
        assert_eq!(list.insert_after(0, front), None);
        assert_eq!(list.insert_before(0, back), None);
        assert_eq!(list.move_to_front(back), None);

        // the list remains usable, and old handles stay dead even after the
        // arena reuses their slots
        list.append(vec![4, 5, 6]);
        assert_ring(&list, &[4, 5, 6]);
        assert_eq!(list.get(front), None);
        assert_eq!(list.remove(back), None);
    }

    #[test]
    fn list_find() {
        let list = List::from_iter(vec![1, 2, 1, 3]);

        let first = list.find(&1).unwrap();
        let last = list.find_last(&1).unwrap();
        assert_ne!(first, last);
        assert_eq!(list.prev(first), None);
        assert_eq!(list.get(list.next(last).unwrap()), Some(&3));

        assert_eq!(list.find(&4), None);
        assert_eq!(list.find_last(&4), None);

        // a single occurrence is found from both ends
        assert_eq!(list.find(&3), list.find_last(&3));
    }

    #[test]
    fn list_traversal() {
        let list = List::from_iter(vec![1, 2, 3, 4, 5]);

        let mut forward = Vec::new();
        let mut node = list.front();
        while let Some(n) = node {
            forward.push(*list.get(n).unwrap());
            node = list.next(n);
        }
        assert_eq!(forward, vec![1, 2, 3, 4, 5]);

        let mut backward = Vec::new();
        let mut node = list.back();
        while let Some(n) = node {
            backward.push(*list.get(n).unwrap());
            node = list.prev(n);
        }
        assert_eq!(backward, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn list_traversal_sees_mutation() {
        let mut list = List::from_iter(vec![1, 2, 3]);

        // removing another node mid-traversal does not derail the walk
        let node = list.front().unwrap();
        let victim = list.back().unwrap();
        assert_eq!(list.remove(victim), Some(3));
        let node = list.next(node).unwrap();
        assert_eq!(list.get(node), Some(&2));
        assert_eq!(list.next(node), None);

        // a node pushed behind the cursor becomes the new boundary
        list.push_back(4);
        let node = list.next(node).unwrap();
        assert_eq!(list.get(node), Some(&4));

        // removing the current node ends the traversal
        assert_eq!(list.remove(node), Some(4));
        assert_eq!(list.next(node), None);
    }

    #[test]
    fn list_get_mut_in_place() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let node = list.find(&2).unwrap();

        *list.get_mut(node).unwrap() = 20;
        assert_eq!(list.get(node), Some(&20));
        assert_ring(&list, &[1, 20, 3]);

        // the old value is gone, the node is addressable by the new one
        assert_eq!(list.find(&2), None);
        assert_eq!(list.find(&20), Some(node));
    }

    #[test]
    fn list_handles_survive_moves() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let node = list.find(&2).unwrap();

        list.move_to_back(node).unwrap();
        assert_eq!(list.get(node), Some(&2));
        assert_eq!(list.back(), Some(node));

        list.move_to_front(node).unwrap();
        assert_eq!(list.front(), Some(node));
        assert_ring(&list, &[2, 1, 3]);
    }
}
