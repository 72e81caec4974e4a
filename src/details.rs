pub(crate) mod blocks;
pub(crate) mod common;
pub(crate) mod distance;
pub(crate) mod matrix;
