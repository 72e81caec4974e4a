//! Normalized compression distances
//!
//! Both distances estimate how well a compressor would handle the
//! concatenation of two sequences compared to the sequences on their own:
//!
//! `NCD = (min(C(xy), C(yx)) - min(C(x), C(y))) / max(C(x), C(y))`
//!
//! The sequences are first projected onto strings with
//! [`equivalent_string`](crate::projection::equivalent_string). These are not
//! metrics in the strict sense; the arithmetic coding variant does not even
//! assign a distance of 0.0 to identical sequences.

use std::fmt::Display;
use std::hash::Hash;

use ahash::AHashMap;

use crate::error::Result;
use crate::projection::equivalent_string;

fn ncd<F>(s1: &[char], s2: &[char], size: F) -> f64
where
    F: Fn(&[char]) -> f64,
{
    let joined1: Vec<char> = s1.iter().chain(s2).copied().collect();
    let joined2: Vec<char> = s2.iter().chain(s1).copied().collect();
    let concat_size = size(&joined1).min(size(&joined2));

    let size1 = size(s1);
    let size2 = size(s2);
    let maximum = size1.max(size2);
    if maximum == 0.0 {
        log::warn!("compression distance of two incompressible sequences, using 0.0");
        return 0.0;
    }

    (concat_size - size1.min(size2)) / maximum
}

fn symbol_counts(data: &[char]) -> AHashMap<char, usize> {
    let mut counts = AHashMap::new();
    for &ch in data {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// `1 +` the base 2 Shannon entropy of the symbol distribution.
fn entropy_size(data: &[char]) -> f64 {
    let total = data.len() as f64;
    let entropy: f64 = symbol_counts(data)
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    1.0 + entropy
}

/// Start and width of the coding interval of every symbol. The most frequent
/// symbol comes first, ties are broken by the larger symbol.
fn probabilities(data: &[char]) -> AHashMap<char, (f64, f64)> {
    let mut counts: Vec<(char, usize)> = symbol_counts(data).into_iter().collect();
    counts.sort_unstable_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));

    let total = data.len() as f64;
    let mut cumulative = 0;
    let mut model = AHashMap::with_capacity(counts.len());
    for (ch, count) in counts {
        model.insert(ch, (cumulative as f64 / total, count as f64 / total));
        cumulative += count;
    }
    model
}

/// Number of bits needed for the numerator of the shortest binary fraction
/// inside the arithmetic coding interval of `data`.
///
/// The interval is tracked in floating point, so for long inputs whose interval
/// shrinks below the available precision, the information content of the
/// interval is used instead.
fn arith_size(data: &[char]) -> f64 {
    let model = probabilities(data);

    let mut start = 0.0;
    let mut width = 1.0;
    let mut log_width = 0.0;
    for ch in data {
        let (p_start, p_width) = model[ch];
        start += p_start * width;
        width *= p_width;
        log_width += f64::log2(p_width);
    }

    if start == 0.0 {
        return 0.0;
    }

    let end = start + width;
    let max_bits = (-log_width).ceil() as i32 + 1;
    for bits in 0..=max_bits {
        let denominator = 2f64.powi(bits);
        // the first fraction inside the interval is already in lowest terms,
        // an even numerator would have matched with one bit less
        let numerator = (start * denominator).floor() + 1.0;
        if numerator / denominator < end {
            return numerator.log2().ceil();
        }
    }
    f64::from(max_bits)
}

fn projected_ncd<Iter1, Iter2, Elem, F>(s1: Iter1, s2: Iter2, size: F) -> Result<f64>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash + Display,
    F: Fn(&[char]) -> f64,
{
    let (s1, s2) = equivalent_string(s1, s2)?;
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    Ok(ncd(&s1, &s2, size))
}

/// Normalized compression distance using the entropy of the symbol
/// distribution as compressed size.
///
/// # Errors
///
/// Fails when the sequences have too many distinct elements to be projected
/// onto strings.
pub fn entropy_ncd<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> Result<f64>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash + Display,
{
    projected_ncd(s1, s2, entropy_size)
}

/// Normalized compression distance using arithmetic coding, with the symbol
/// model built from each compressed string on its own.
///
/// # Errors
///
/// Fails when the sequences have too many distinct elements to be projected
/// onto strings.
pub fn arith_ncd<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> Result<f64>
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash + Display,
{
    projected_ncd(s1, s2, arith_size)
}
