//! MMCWPA distance
//!
//! Distance based on the Modified Moving Contracting Window Pattern Algorithm.
//! The algorithm repeatedly looks for a long run of elements shared by the not
//! yet matched parts ("fragments") of both sequences, preferring the earlier
//! fragments of the first sequence. Each match removes the run from its
//! fragments, splitting them when the run sits in their middle, and adds the
//! square of twice its length to the similarity score. The search ends when no
//! fragment of one sequence shares an element with a fragment of the other.
//!
//! The distance is `1 - sqrt(score) / (len1 + len2)`, so identical sequences
//! have a distance of 0.0 and sequences without a common element one of 1.0.

use std::ops::Range;

use crate::details::common::find_subsequence;

/// A shared run of `len` elements at `s1[x_start..]` and `s2[y_start..]`,
/// found inside the fragments `x_fragment` and `y_fragment`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PatternMatch {
    x_fragment: usize,
    x_start: usize,
    y_fragment: usize,
    y_start: usize,
    len: usize,
}

/// Outcome of a single search round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Round {
    Found(PatternMatch),
    Terminal,
}

/// Search state over both sequences.
struct Search<'a, Elem1, Elem2> {
    s1: &'a [Elem1],
    s2: &'a [Elem2],
    x_fragments: Vec<Range<usize>>,
    y_fragments: Vec<Range<usize>>,
    ssnc: usize,
}

impl<'a, Elem1, Elem2> Search<'a, Elem1, Elem2>
where
    Elem1: PartialEq<Elem2>,
{
    fn new(s1: &'a [Elem1], s2: &'a [Elem2]) -> Self {
        let x_fragments = if s1.is_empty() { vec![] } else { vec![0..s1.len()] };
        let y_fragments = if s2.is_empty() { vec![] } else { vec![0..s2.len()] };
        Self {
            s1,
            s2,
            x_fragments,
            y_fragments,
            ssnc: 0,
        }
    }

    /// First shared run found when scanning the fragments of `s1` in order,
    /// trying the windows of each fragment from longest to shortest and from left
    /// to right. The run is located at its first occurrence in the first fragment
    /// of `s2` that contains it.
    fn find_pattern(&self) -> Round {
        for (x_fragment, x_range) in self.x_fragments.iter().enumerate() {
            let field = &self.s1[x_range.clone()];
            for len in (1..=field.len()).rev() {
                for (offset, window) in field.windows(len).enumerate() {
                    for (y_fragment, y_range) in self.y_fragments.iter().enumerate() {
                        if let Some(position) = find_subsequence(&self.s2[y_range.clone()], window) {
                            return Round::Found(PatternMatch {
                                x_fragment,
                                x_start: x_range.start + offset,
                                y_fragment,
                                y_start: y_range.start + position,
                                len,
                            });
                        }
                    }
                }
            }
        }
        Round::Terminal
    }

    fn apply(&mut self, pattern: PatternMatch) {
        split_fragment(&mut self.x_fragments, pattern.x_fragment, pattern.x_start, pattern.len);
        split_fragment(&mut self.y_fragments, pattern.y_fragment, pattern.y_start, pattern.len);
        self.ssnc += (2 * pattern.len).pow(2);
    }

    fn run(mut self) -> usize {
        let mut rounds = 0;
        while let Round::Found(pattern) = self.find_pattern() {
            self.apply(pattern);
            rounds += 1;
        }
        log::debug!("mmcwpa finished after {rounds} rounds with ssnc {}", self.ssnc);
        self.ssnc
    }
}

/// Replace fragment `index` by the parts left and right of the matched run,
/// dropping empty parts.
fn split_fragment(fragments: &mut Vec<Range<usize>>, index: usize, start: usize, len: usize) {
    let fragment = fragments[index].clone();
    let pieces = [fragment.start..start, start + len..fragment.end]
        .into_iter()
        .filter(|piece| !piece.is_empty());
    fragments.splice(index..=index, pieces);
}

fn mmcwpa_distance<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    let total_len = s1.len() + s2.len();
    if total_len == 0 {
        log::warn!("mmcwpa distance between two empty sequences, using 0.0");
        return 0.0;
    }

    let ssnc = Search::new(s1, s2).run();
    1.0 - (ssnc as f64 / (total_len as f64).powi(2)).sqrt()
}

/// MMCWPA distance in the range 0.0 - 1.0.
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    mmcwpa_distance(&s1, &s2)
}
