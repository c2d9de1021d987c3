pub mod solution;
pub mod types;

pub use solution::Solution;
pub use types::*;
