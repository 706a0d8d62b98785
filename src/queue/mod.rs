//! A singly linked string queue.
//!
//! [`list::StrQueue`] owns a chain of heap-allocated nodes, each holding one
//! owned copy of a caller-supplied string. The queue keeps head and tail
//! pointers plus a cached element count, so insertion at either end and
//! removal at the head are O(1), and `len` never traverses.
//!
//! Beyond the queue basics there are two in-place rearrangements:
//! [`list::StrQueue::reverse`], a single pointer-relinking pass, and
//! [`list::StrQueue::sort`], a stable selection sort under a pluggable
//! string ordering (see [`crate::order`]). Neither allocates or frees a node.
//!
//! # Examples
//!
//! ```
//! use strand_collections::queue::list::StrQueue;
//!
//! let mut q = StrQueue::new();
//! q.push_tail("banana");
//! q.push_tail("Apple");
//! q.push_tail("cherry10");
//! q.push_tail("cherry2");
//! assert_eq!(q.len(), 4);
//!
//! q.sort();
//! let sorted: Vec<&str> = q.iter().collect();
//! assert_eq!(sorted, vec!["Apple", "banana", "cherry2", "cherry10"]);
//!
//! q.reverse();
//! assert_eq!(q.pop_head().as_deref(), Some("cherry10"));
//! assert_eq!(q.len(), 3);
//! ```
pub mod iter;
pub mod list;
mod node;
