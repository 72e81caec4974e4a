pub mod birnbaum;
pub mod bulk_delete;
pub mod compression;
pub mod damerau;
pub mod fragile_ends;
pub mod jaccard;
pub mod jaro;
pub mod levenshtein;
pub mod mmcwpa;
pub mod ratcliff_obershelp;
pub mod sorensen;
pub mod stemmatological;
