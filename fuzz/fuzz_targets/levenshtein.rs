#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::distance::levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    let len1 = texts.s1.chars().count();
    let len2 = texts.s2.chars().count();
    assert!(dist >= len1.abs_diff(len2) as f64);
    assert!(dist <= len1.max(len2) as f64);

    let norm = levenshtein::normalized_distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&norm));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
