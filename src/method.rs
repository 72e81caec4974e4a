//! Dispatch over the available metrics by name
//!
//! Every metric of the crate is addressable through the closed [`Method`]
//! enumeration. [`distance`] compares two or more sequences with one of them,
//! while [`distance_by_name`] accepts the registry name of the method.
//!
//! ```
//! use seqsim::{distance, distance_by_name, Method};
//!
//! let seqs = ["kitten".as_bytes(), "sitting".as_bytes()];
//! assert_eq!(3.0, distance(&seqs, Method::Levenshtein, false).unwrap());
//! assert_eq!(3.0, distance_by_name(&seqs, "levenshtein", false).unwrap());
//! assert!(distance_by_name(&seqs, "hamming", false).is_err());
//! ```

use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use crate::distance::{
    birnbaum, bulk_delete, compression, damerau, fragile_ends, jaccard, jaro, levenshtein, mmcwpa,
    ratcliff_obershelp, sorensen, stemmatological,
};
use crate::error::{Result, SeqSimError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    Levenshtein,
    Damerau,
    BulkDelete,
    #[cfg_attr(feature = "serde", serde(rename = "stemmatological_simil"))]
    Stemmatological,
    #[cfg_attr(feature = "serde", serde(rename = "fragile_ends_simil"))]
    FragileEnds,
    Birnbaum,
    BirnbaumSimil,
    FastBirnbaum,
    Mmcwpa,
    Jaccard,
    SubseqJaccard,
    Jaro,
    JaroWinkler,
    Sorensen,
    RatcliffObershelp,
    ArithNcd,
    #[cfg_attr(feature = "serde", serde(rename = "entropy"))]
    EntropyNcd,
}

impl Method {
    pub const ALL: [Method; 17] = [
        Method::Levenshtein,
        Method::Damerau,
        Method::BulkDelete,
        Method::Stemmatological,
        Method::FragileEnds,
        Method::Birnbaum,
        Method::BirnbaumSimil,
        Method::FastBirnbaum,
        Method::Mmcwpa,
        Method::Jaccard,
        Method::SubseqJaccard,
        Method::Jaro,
        Method::JaroWinkler,
        Method::Sorensen,
        Method::RatcliffObershelp,
        Method::ArithNcd,
        Method::EntropyNcd,
    ];

    /// Name of the method in the registry
    pub fn name(self) -> &'static str {
        match self {
            Method::Levenshtein => "levenshtein",
            Method::Damerau => "damerau",
            Method::BulkDelete => "bulk_delete",
            Method::Stemmatological => "stemmatological_simil",
            Method::FragileEnds => "fragile_ends_simil",
            Method::Birnbaum => "birnbaum",
            Method::BirnbaumSimil => "birnbaum_simil",
            Method::FastBirnbaum => "fast_birnbaum",
            Method::Mmcwpa => "mmcwpa",
            Method::Jaccard => "jaccard",
            Method::SubseqJaccard => "subseq_jaccard",
            Method::Jaro => "jaro",
            Method::JaroWinkler => "jaro_winkler",
            Method::Sorensen => "sorensen",
            Method::RatcliffObershelp => "ratcliff_obershelp",
            Method::ArithNcd => "arith_ncd",
            Method::EntropyNcd => "entropy",
        }
    }

    /// Whether the raw result of the method does not depend on the `normal`
    /// flag of [`distance`].
    pub fn is_normalized(self) -> bool {
        !matches!(
            self,
            Method::Levenshtein
                | Method::Damerau
                | Method::BulkDelete
                | Method::Stemmatological
                | Method::FragileEnds
                | Method::BirnbaumSimil
        )
    }
}

impl FromStr for Method {
    type Err = SeqSimError;

    fn from_str(name: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| SeqSimError::UnknownMethod(name.to_owned()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn pair_distance<T>(s1: &[T], s2: &[T], method: Method, normal: bool) -> Result<f64>
where
    T: Eq + Hash + Display,
{
    let (s1, s2) = (s1.iter(), s2.iter());
    let dist = match (method, normal) {
        (Method::Levenshtein, false) => levenshtein::distance(s1, s2),
        (Method::Levenshtein, true) => levenshtein::normalized_distance(s1, s2),
        (Method::Damerau, false) => damerau::distance(s1, s2),
        (Method::Damerau, true) => damerau::normalized_distance(s1, s2),
        (Method::BulkDelete, false) => bulk_delete::distance(s1, s2),
        (Method::BulkDelete, true) => bulk_delete::normalized_distance(s1, s2),
        (Method::Stemmatological, false) => stemmatological::distance(s1, s2),
        (Method::Stemmatological, true) => stemmatological::normalized_distance(s1, s2),
        (Method::FragileEnds, false) => fragile_ends::distance(s1, s2),
        (Method::FragileEnds, true) => fragile_ends::normalized_distance(s1, s2),
        (Method::BirnbaumSimil, false) => birnbaum::similarity(s1, s2),
        (Method::BirnbaumSimil, true) => birnbaum::normalized_similarity(s1, s2),
        (Method::Birnbaum, _) => birnbaum::distance(s1, s2),
        (Method::FastBirnbaum, _) => birnbaum::fast_distance(s1, s2),
        (Method::Mmcwpa, _) => mmcwpa::distance(s1, s2),
        (Method::Jaccard, _) => jaccard::distance(s1, s2),
        (Method::SubseqJaccard, _) => jaccard::subseq_distance(s1, s2),
        (Method::Jaro, _) => jaro::distance(s1, s2),
        (Method::JaroWinkler, _) => jaro::jaro_winkler_distance(s1, s2),
        (Method::Sorensen, _) => sorensen::distance(s1, s2),
        (Method::RatcliffObershelp, _) => ratcliff_obershelp::distance(s1, s2),
        (Method::ArithNcd, _) => compression::arith_ncd(s1, s2)?,
        (Method::EntropyNcd, _) => compression::entropy_ncd(s1, s2)?,
    };
    Ok(dist)
}

/// Distance between two or more sequences.
///
/// For more than two sequences the mean distance over all pairs is returned.
/// With `normal` set, methods that support it return a value in the range
/// 0.0 - 1.0. Methods that are normalized anyway ignore the flag.
///
/// Since the method is only known at runtime, the elements have to satisfy the
/// bounds of every method: `Eq + Hash` for the set based metrics and `Display`
/// for the compression based ones. Elements that only implement `PartialEq`
/// can still be compared with the functions of the [`distance`](mod@crate::distance)
/// module directly.
///
/// # Errors
///
/// Fails with [`SeqSimError::TooFewSequences`] for less than two sequences and
/// with [`SeqSimError::DomainLimitExceeded`] when a compression based method
/// is used on sequences with too many distinct elements.
pub fn distance<S, T>(sequences: &[S], method: Method, normal: bool) -> Result<f64>
where
    S: AsRef<[T]>,
    T: Eq + Hash + Display,
{
    if sequences.len() < 2 {
        return Err(SeqSimError::TooFewSequences(sequences.len()));
    }
    if normal && method.is_normalized() {
        log::warn!("`{method}` is already normalized, ignoring the normal flag");
    }

    let pairs = sequences.len() * (sequences.len() - 1) / 2;
    log::debug!(
        "computing `{method}` over {} sequences ({pairs} pairs)",
        sequences.len()
    );

    let mut total = 0.0;
    for (idx, s1) in sequences.iter().enumerate() {
        for s2 in &sequences[idx + 1..] {
            total += pair_distance(s1.as_ref(), s2.as_ref(), method, normal)?;
        }
    }
    Ok(total / pairs as f64)
}

/// [`distance`] with the method given by its registry name.
///
/// # Errors
///
/// Additionally fails with [`SeqSimError::UnknownMethod`] when `method` is not
/// a registry name.
pub fn distance_by_name<S, T>(sequences: &[S], method: &str, normal: bool) -> Result<f64>
where
    S: AsRef<[T]>,
    T: Eq + Hash + Display,
{
    distance(sequences, method.parse()?, normal)
}
