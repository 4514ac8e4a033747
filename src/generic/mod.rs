//! Generic structures, not specific to deduction.

pub mod combinations;
