use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{list::StrQueue, node::Node};

/// A head-to-tail iterator over a queue's stored strings.
///
/// The borrow of the queue keeps it unmodified for the iterator's lifetime.
pub struct Iter<'a> {
    current: Option<NonNull<Node>>,
    _queue: PhantomData<&'a StrQueue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a StrQueue) -> Self {
        Self {
            current: queue.head_ptr(),
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.current = node.next();
            node.value()
        })
    }
}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
