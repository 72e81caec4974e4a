//! Projection of arbitrary sequences onto strings
//!
//! Metrics that only operate on text can still compare sequences of arbitrary
//! elements by first mapping every distinct element of both sequences to a
//! printable character. Equal elements map to the same character, so the
//! projection preserves everything these metrics look at.
//!
//! ```
//! use seqsim::projection::equivalent_string;
//!
//! let (s1, s2) = equivalent_string([1, 2, 3], [3, 4]).unwrap();
//! assert_eq!("012", s1);
//! assert_eq!("23", s2);
//! ```

use std::fmt::Display;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};

use crate::error::{Result, SeqSimError};

/// Characters used by the projection, in the order they are assigned.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// Maximum number of distinct elements the projection supports.
pub const PRINTABLE_LEN: usize = 100;

/// Map both sequences to strings.
///
/// The distinct elements are ordered by their [`Display`] rendering, with
/// ties kept in order of first appearance, and the n-th element is mapped to
/// the n-th character of [`PRINTABLE`].
///
/// # Errors
///
/// Fails with [`SeqSimError::DomainLimitExceeded`] when the sequences hold more
/// than [`PRINTABLE_LEN`] distinct elements.
pub fn equivalent_string<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> Result<(String, String)>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash + Display,
{
    let s1: Vec<Elem> = s1.into_iter().collect();
    let s2: Vec<Elem> = s2.into_iter().collect();

    let mut seen: AHashSet<&Elem> = AHashSet::new();
    let mut symbols: Vec<(String, &Elem)> = Vec::new();
    for elem in s1.iter().chain(&s2) {
        if seen.insert(elem) {
            symbols.push((elem.to_string(), elem));
        }
    }

    if symbols.len() > PRINTABLE_LEN {
        return Err(SeqSimError::DomainLimitExceeded {
            found: symbols.len(),
            limit: PRINTABLE_LEN,
        });
    }

    symbols.sort_by(|a, b| a.0.cmp(&b.0));
    let table: AHashMap<&Elem, char> = symbols
        .into_iter()
        .zip(PRINTABLE.chars())
        .map(|((_, elem), ch)| (elem, ch))
        .collect();

    let project = |s: &[Elem]| -> String { s.iter().map(|elem| table[elem]).collect() };
    Ok((project(&s1), project(&s2)))
}
