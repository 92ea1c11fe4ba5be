//! Cursor-based doubly linked list
//!
//! Nodes live in an index arena owned by the list; links are slot indices,
//! so no node handle ever escapes. A single movable cursor (`current`)
//! drives stateful traversal the way a record browser steps through
//! entries. Ids are carried next to each payload and are not required to be
//! unique; callers check [`CursorList::exists`] before inserting.

use shared::{component_debug, ComponentId};

/// Index of a slot in the arena
type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Node<T> {
    id: u32,
    data: T,
    previous: Link,
    next: Link,
}

/// Ordered, identity-keyed doubly linked list with a movable cursor
#[derive(Debug, Clone)]
pub struct CursorList<T> {
    /// Arena of nodes; `None` marks a vacated slot
    slots: Vec<Option<Node<T>>>,
    /// Vacated slots available for new nodes
    vacant: Vec<usize>,
    first: Link,
    last: Link,
    current: Link,
    total_count: usize,
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CursorList<T> {
    /// Create an empty list with no cursor
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            first: None,
            last: None,
            current: None,
            total_count: 0,
        }
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    fn next_of(&self, index: usize) -> Link {
        self.node(index).and_then(|node| node.next)
    }

    fn previous_of(&self, index: usize) -> Link {
        self.node(index).and_then(|node| node.previous)
    }

    fn id_at(&self, index: usize) -> Option<u32> {
        self.node(index).map(|node| node.id)
    }

    /// Slot indices in traversal order, first to last
    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.first, move |&index| self.next_of(index))
    }

    /// Append a record at the tail. Duplicate ids are accepted.
    pub fn add(&mut self, data: T, id: u32) {
        let node = Node {
            id,
            data,
            previous: self.last,
            next: None,
        };

        let index = match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.last {
            Some(last) => {
                if let Some(tail) = self.node_mut(last) {
                    tail.next = Some(index);
                }
            }
            None => self.first = Some(index),
        }
        self.last = Some(index);
        self.total_count += 1;
    }

    /// Remove the node under the cursor and move the cursor to its former
    /// successor (none when the tail was removed). No-op without a cursor.
    pub fn remove(&mut self) -> Option<(u32, T)> {
        let index = self.current?;
        let node = self.slots.get_mut(index)?.take()?;

        match node.previous {
            Some(previous) => {
                if let Some(before) = self.node_mut(previous) {
                    before.next = node.next;
                }
            }
            None => self.first = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(after) = self.node_mut(next) {
                    after.previous = node.previous;
                }
            }
            None => self.last = node.previous,
        }

        self.current = node.next;
        self.total_count -= 1;
        self.vacant.push(index);

        component_debug!(
            ComponentId::current(),
            "Removed node id={} ({} remaining)",
            node.id,
            self.total_count
        );
        Some((node.id, node.data))
    }

    /// Payload under the cursor
    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|index| self.node(index)).map(|node| &node.data)
    }

    /// Mutable payload under the cursor
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let index = self.current?;
        self.node_mut(index).map(|node| &mut node.data)
    }

    /// Id stored in the node under the cursor
    pub fn current_id(&self) -> Option<u32> {
        self.current.and_then(|index| self.id_at(index))
    }

    /// Move the cursor to the first record equal to `value`. The cursor is
    /// left alone when nothing matches.
    pub fn set_current(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self
            .indices()
            .find(|&index| self.node(index).is_some_and(|node| node.data == *value));
        match found {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to the first node carrying `id`. The cursor is left
    /// alone when nothing matches.
    pub fn seek(&mut self, id: u32) -> bool {
        let found = self.indices().find(|&index| self.id_at(index) == Some(id));
        match found {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// Step forward. From no cursor this re-enters at the first node; past
    /// the tail it leaves the cursor empty.
    pub fn next(&mut self) -> Option<&T> {
        self.current = match self.current {
            None => self.first,
            Some(index) => self.next_of(index),
        };
        self.current()
    }

    /// Step backward. From no cursor this re-enters at the last node; past
    /// the head it leaves the cursor empty.
    pub fn previous(&mut self) -> Option<&T> {
        self.current = match self.current {
            None => self.last,
            Some(index) => self.previous_of(index),
        };
        self.current()
    }

    pub fn has_next(&self) -> bool {
        self.current.and_then(|index| self.next_of(index)).is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.current.and_then(|index| self.previous_of(index)).is_some()
    }

    pub fn move_to_first(&mut self) {
        self.current = self.first;
    }

    pub fn move_to_last(&mut self) {
        self.current = self.last;
    }

    /// Identity check of the cursor against the head (both empty counts)
    pub fn is_at_first(&self) -> bool {
        self.current == self.first
    }

    /// Identity check of the cursor against the tail (both empty counts)
    pub fn is_at_last(&self) -> bool {
        self.current == self.last
    }

    pub fn exists(&self, id: u32) -> bool {
        self.indices().any(|index| self.id_at(index) == Some(id))
    }

    /// 0-based rank of the cursor in traversal order
    pub fn current_position(&self) -> Option<usize> {
        let current = self.current?;
        self.indices().position(|index| index == current)
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Order nodes by ascending id with an adjacent bubble sort.
    ///
    /// Contents `(id, payload)` are swapped between fixed nodes; links never
    /// change. A cursor set before sorting stays on the same node, which may
    /// now hold a different record. Returns `false` for an empty list.
    pub fn sort(&mut self) -> bool {
        let Some(first) = self.first else {
            return false;
        };

        let mut boundary: Link = None;
        let mut passes = 0usize;
        let mut swaps = 0usize;
        loop {
            let mut swapped = false;
            let mut left = first;
            while let Some(right) = self.next_of(left).filter(|&right| Some(right) != boundary) {
                if self.id_at(left) > self.id_at(right) {
                    self.interchange(left, right);
                    swapped = true;
                    swaps += 1;
                }
                left = right;
            }
            boundary = Some(left);
            passes += 1;
            if !swapped {
                break;
            }
        }

        component_debug!(
            ComponentId::current(),
            "Sorted {} nodes in {} passes with {} swaps",
            self.total_count,
            passes,
            swaps
        );
        true
    }

    /// Exchange the stored id and payload of two slots
    fn interchange(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(high);
        if let (Some(Some(left)), Some(Some(right))) = (head.get_mut(low), tail.first_mut()) {
            std::mem::swap(&mut left.id, &mut right.id);
            std::mem::swap(&mut left.data, &mut right.data);
        }
    }

    /// Forward iterator over `(id, payload)` that leaves the cursor alone
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.first,
        }
    }
}

/// Borrowing iterator over a [`CursorList`]
pub struct Iter<'a, T> {
    list: &'a CursorList<T>,
    cursor: Link,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some((node.id, &node.data))
    }
}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = (u32, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
