use core::cmp::Ordering;

use super::traits::StrOrder;

/// Plain byte-wise string ordering, case-sensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalOrder;

impl StrOrder for LexicalOrder {
    fn cmp(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}
