use core::cmp::Ordering;
use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::order::{natural::NaturalOrder, traits::StrOrder};

use super::{iter::Iter, node::Node};

/// A FIFO/deque-capable singly linked list of owned strings.
///
/// The queue caches its tail pointer and element count, so `push_head`,
/// `push_tail`, `pop_head`, and `len` are all O(1). Every node and payload
/// is owned exclusively by the queue and freed exactly once, on removal or
/// on drop.
#[derive(Debug)]
pub struct StrQueue {
    head: Option<NonNull<Node>>,
    tail: Option<NonNull<Node>>,
    len: usize,
}

impl StrQueue {
    /// Creates a new, empty queue. Allocates nothing.
    pub const fn new() -> Self {
        StrQueue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the cached element count without traversing.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the payload at the head of the queue.
    pub fn front(&self) -> Option<&str> {
        self.head.map(|node| unsafe { &*node.as_ptr() }.value())
    }

    /// Inserts a copy of `s` before the current head.
    ///
    /// The queue stores its own allocation; the caller's string is not
    /// retained by reference.
    pub fn push_head(&mut self, s: &str) {
        let node = Node::alloc(s, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends a copy of `s` after the current tail.
    pub fn push_tail(&mut self, s: &str) {
        let node = Node::alloc(s, None);
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detaches the head node and returns its payload, or `None` if the
    /// queue is empty.
    pub fn pop_head(&mut self) -> Option<Box<str>> {
        let head = self.head?;
        self.head = unsafe { head.as_ref().next() };
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        // The node is unlinked; this is its single reclamation.
        Some(unsafe { Node::into_value(head) })
    }

    /// Removes the head node, copying its payload into `out`.
    ///
    /// At most `out.len() - 1` bytes are copied and a NUL terminator is
    /// always written inside the slice; longer payloads are silently
    /// truncated at a byte boundary. An empty `out` suppresses the copy but
    /// the node is still removed and freed. Returns `false` only when the
    /// queue is empty, leaving `out` untouched.
    pub fn pop_head_into(&mut self, out: &mut [u8]) -> bool {
        let Some(value) = self.pop_head() else {
            return false;
        };
        if let Some(cap) = out.len().checked_sub(1) {
            let n = cap.min(value.len());
            out[..n].copy_from_slice(&value.as_bytes()[..n]);
            out[n] = 0;
        }
        true
    }

    /// Removes every element, head to tail.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Returns a head-to-tail iterator over the stored strings.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Reverses the queue in place.
    ///
    /// A single pass inverts every `next` link and swaps head and tail. No
    /// node or payload is allocated, freed, or copied; queues with fewer
    /// than two elements are left untouched.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                let n = &mut *node.as_ptr();
                current = n.next();
                n.set_next(prev);
            }
            prev = Some(node);
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Sorts the queue in ascending natural order: case-insensitive for
    /// letters, with embedded digit runs compared as numeric magnitudes
    /// (`"item2"` before `"item10"`).
    pub fn sort(&mut self) {
        self.sort_by(&NaturalOrder);
    }

    /// Sorts the queue in ascending order under `order`.
    ///
    /// Selection-style and O(n²): each pass unlinks the minimal remaining
    /// node and appends it to the sorted prefix, relinking only — nothing is
    /// allocated or freed. Taking the *first* minimal node under a strict
    /// less-than comparison keeps equal elements in their original relative
    /// order, so the sort is stable. Queues with fewer than two elements are
    /// left untouched.
    pub fn sort_by<O>(&mut self, order: &O)
    where
        O: StrOrder + ?Sized,
    {
        if self.len < 2 {
            return;
        }

        let mut rest = self.head.take();
        self.tail = None;
        let mut sorted_head: Option<NonNull<Node>> = None;
        let mut sorted_tail: Option<NonNull<Node>> = None;

        while let Some(first) = rest {
            unsafe {
                let mut min = first;
                let mut min_prev: Option<NonNull<Node>> = None;
                let mut prev = first;
                let mut current = first.as_ref().next();
                while let Some(node) = current {
                    if order.cmp(node.as_ref().value(), min.as_ref().value()) == Ordering::Less {
                        min = node;
                        min_prev = Some(prev);
                    }
                    prev = node;
                    current = node.as_ref().next();
                }

                match min_prev {
                    Some(mut p) => p.as_mut().set_next(min.as_ref().next()),
                    None => rest = min.as_ref().next(),
                }
                min.as_mut().set_next(None);

                match sorted_tail {
                    Some(mut t) => t.as_mut().set_next(Some(min)),
                    None => sorted_head = Some(min),
                }
                sorted_tail = Some(min);
            }
        }

        self.head = sorted_head;
        self.tail = sorted_tail;
    }

    pub(crate) fn head_ptr(&self) -> Option<NonNull<Node>> {
        self.head
    }
}

impl Drop for StrQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

// The queue is the sole owner of its nodes; nothing is shared or aliased
// across the API boundary.
unsafe impl Send for StrQueue {}
unsafe impl Sync for StrQueue {}
