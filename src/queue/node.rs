use core::ptr::NonNull;

use alloc::boxed::Box;

/// A node in the queue's chain.
///
/// Each node exclusively owns one string payload. The queue hands nodes
/// around as raw `NonNull` pointers and is the only owner; a node is
/// reclaimed exactly once, via [`Node::into_value`] or the queue's drop.
pub(crate) struct Node {
    value: Box<str>,
    next: Option<NonNull<Node>>,
}

impl Node {
    /// Allocates a node holding its own copy of `value`.
    pub(crate) fn alloc(value: &str, next: Option<NonNull<Node>>) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node {
            value: Box::from(value),
            next,
        })))
    }

    /// Reclaims the node's storage and returns the payload.
    ///
    /// # Safety
    ///
    /// `node` must have come from [`Node::alloc`] and must already be
    /// unlinked; the pointer is dead after this call.
    pub(crate) unsafe fn into_value(node: NonNull<Node>) -> Box<str> {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn next(&self) -> Option<NonNull<Node>> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.next = next;
    }
}
