pub mod capacity;
pub mod score;
pub mod trip;

pub use capacity::{check_capacity, find_violations};
pub use score::{score, score_parallel, score_with, weighted_reindeer_weariness};
pub use trip::{weighted_trip_length, weighted_trip_length_default};
