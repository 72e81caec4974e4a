//! `seqsim` provides similarity and distance metrics for sequences of
//! arbitrary, comparable elements.
//!
//! ## Key Features
//!
//! - **Generic Inputs**: Every metric accepts any two `IntoIterator`s whose
//!   elements can be compared, so the same functions work on characters, bytes,
//!   phonetic segments or tokens.
//! - **Edit Distances**: Levenshtein and Damerau distances, along with custom
//!   cost rules for bulk deletions and fragile sequence ends, are all solved by
//!   a shared [`wagner_fischer`] engine that accepts user defined rules as well.
//! - **Subsequence Metrics**: The Birnbaum similarity and the MMCWPA distance
//!   reward longer shared runs of elements over scattered matches.
//!
//! ## Usage
//!
//! The metrics live in the [`distance`] module. Alternatively, [`distance()`]
//! dispatches to a metric by its [`Method`] and handles more than two sequences.
//!
//! ```rust
//! use seqsim::distance::{birnbaum, levenshtein, mmcwpa};
//! use seqsim::Method;
//!
//! assert_eq!(3.0, levenshtein::distance("kitten".chars(), "sitting".chars()));
//!
//! // any element type works, e.g. bytes or whole tokens
//! assert_eq!(3.0, levenshtein::distance("kitten".bytes(), "sitting".bytes()));
//! assert_eq!(
//!     1.0,
//!     levenshtein::distance(["the", "black", "cat"], ["the", "cat"])
//! );
//!
//! // shared runs of elements
//! assert_eq!(10.0, birnbaum::similarity("kitten".chars(), "sitting".chars()));
//! assert_eq!(1.0, mmcwpa::distance([1, 2, 3], [4, 5]));
//!
//! // the mean distance over all pairs of sequences
//! let seqs = [vec![1, 2, 3], vec![1, 2, 4], vec![1, 2, 3]];
//! let dist = seqsim::distance(&seqs, Method::Levenshtein, false).unwrap();
//! assert!((dist - 2.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! [`wagner_fischer`]: wagner_fischer/index.html
//! [`distance`]: distance/index.html

#![forbid(unsafe_code)]
#![allow(
    // these casts are sometimes needed. Sequence lengths are converted to f64
    // for normalization and scoring
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    // not practical
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::too_many_lines,
    // noisy
    clippy::missing_errors_doc,
)]

pub(crate) mod details;
pub mod distance;
pub mod error;
pub mod method;
pub mod projection;
pub mod wagner_fischer;

pub use error::{Result, SeqSimError};
pub use method::{distance, distance_by_name, Method};

#[cfg(test)]
mod tests;
