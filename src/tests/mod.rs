//! Test modules for the FlexID crate

pub mod test_utils;

mod sequence_tests;
