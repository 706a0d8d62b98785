use core::cmp::Ordering;

/// A total ordering over strings.
///
/// Implementations must be pure: the result may depend only on the two
/// arguments, and equal inputs must compare `Equal` symmetrically.
pub trait StrOrder {
    /// Compare `a` against `b`.
    fn cmp(&self, a: &str, b: &str) -> Ordering;
}
