#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::distance::{damerau, levenshtein};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = damerau::distance(texts.s1.chars(), texts.s2.chars());
    assert!(dist <= levenshtein::distance(texts.s1.chars(), texts.s2.chars()));

    let norm = damerau::normalized_distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&norm));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
