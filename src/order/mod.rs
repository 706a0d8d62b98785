//! String ordering strategies.
//!
//! Sorting in this crate goes through the [`traits::StrOrder`] seam, so the
//! comparison can be swapped without touching queue logic. The default is
//! [`natural::NaturalOrder`]; [`lexical::LexicalOrder`] is a plain byte-wise
//! alternative.
pub mod lexical;
pub mod natural;
pub mod traits;
