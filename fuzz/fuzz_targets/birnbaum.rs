#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::distance::birnbaum;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = birnbaum::distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&dist));

    let dist = birnbaum::fast_distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&dist));

    let len = texts.s1.chars().count();
    let sim = birnbaum::fast_similarity(texts.s1.chars(), texts.s1.chars());
    assert_eq!((len * (len + 1) / 2) as f64, sim);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
