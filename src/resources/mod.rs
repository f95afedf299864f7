//! Resources definitions.

pub mod sine;
