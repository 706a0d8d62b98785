#![no_std]

extern crate alloc;

pub mod order;
pub mod queue;
