//! Utilities used for testing and benchmarking.

pub mod positions;

mod perft;
pub use perft::run_perft;
