#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::distance::{bulk_delete, fragile_ends, stemmatological};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub max_del_len: u8,
}

fn fuzz(texts: Texts) {
    let bulk_args = bulk_delete::Args::default().max_del_len(usize::from(texts.max_del_len));
    let norm =
        bulk_delete::normalized_distance_with_args(texts.s1.chars(), texts.s2.chars(), &bulk_args);
    assert!((0.0..=1.0).contains(&norm));

    let stemma_args =
        stemmatological::Args::default().max_del_len(usize::from(texts.max_del_len));
    let norm = stemmatological::normalized_distance_with_args(
        texts.s1.chars(),
        texts.s2.chars(),
        &stemma_args,
    );
    assert!((0.0..=1.0).contains(&norm));

    let norm = fragile_ends::normalized_distance(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&norm));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
