pub mod base;
pub mod base_counts;
pub mod cli;
pub mod error;
pub mod sequence;
pub mod tetramer;
