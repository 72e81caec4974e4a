//! Jaro and Jaro-Winkler distances
//!
//! Thin wrappers around the generic implementations of the `strsim` crate,
//! returning `1 - similarity`.

pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    1.0 - strsim::generic_jaro(&s1, &s2)
}

/// Jaro distance that additionally rewards a common prefix of up to four elements.
pub fn jaro_winkler_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    1.0 - strsim::generic_jaro_winkler(&s1, &s2)
}
