#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::distance::mmcwpa;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = mmcwpa::distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&dist));

    assert_eq!(0.0, mmcwpa::distance(texts.s1.chars(), texts.s1.chars()));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
