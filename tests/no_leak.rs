//! Allocation-balance checks for the queue.
//!
//! A counting wrapper around the system allocator verifies that every node
//! and payload allocated by the queue is freed exactly once, and that the
//! in-place rearrangements never touch the allocator. Everything runs in a
//! single test so no sibling test thread can skew the counters.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use strand_collections::queue::list::StrQueue;

struct Counting;

static ALLOCS: AtomicUsize = AtomicUsize::new(0);
static DEALLOCS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCS.fetch_add(1, Ordering::SeqCst);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        DEALLOCS.fetch_add(1, Ordering::SeqCst);
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static COUNTING: Counting = Counting;

fn counters() -> (usize, usize) {
    (ALLOCS.load(Ordering::SeqCst), DEALLOCS.load(Ordering::SeqCst))
}

#[test]
fn test_queue_frees_everything_exactly_once() {
    const N: usize = 100;

    // Full lifecycle: N inserts then drop must balance the counters.
    let (allocs_before, deallocs_before) = counters();
    {
        let mut q = StrQueue::new();
        for i in 0..N {
            if i % 2 == 0 {
                q.push_tail("abcdefghijklmnop");
            } else {
                q.push_head("0123456789");
            }
        }
        assert_eq!(q.len(), N);

        // Reverse relinks only.
        let (a0, d0) = counters();
        q.reverse();
        assert_eq!(counters(), (a0, d0));
        assert_eq!(q.len(), N);

        // Sort relinks only.
        let (a1, d1) = counters();
        q.sort();
        assert_eq!(counters(), (a1, d1));
        assert_eq!(q.len(), N);

        // Popping without a buffer still frees node and payload.
        for _ in 0..N / 2 {
            let mut sink = [0u8; 4];
            assert!(q.pop_head_into(&mut sink));
        }
        assert_eq!(q.len(), N - N / 2);
    }
    let (allocs_after, deallocs_after) = counters();

    let allocated = allocs_after - allocs_before;
    let deallocated = deallocs_after - deallocs_before;
    assert_eq!(
        allocated, deallocated,
        "queue lifecycle leaked or double-freed: {allocated} allocs vs {deallocated} deallocs"
    );
    // One node box and one payload box per element.
    assert!(allocated >= 2 * N);
}
