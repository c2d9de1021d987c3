//! Weighted reindeer weariness: scores Santa's sleigh trips.
//!
//! Every trip leaves the North Pole loaded with its gifts, visits them in order
//! and flies home empty. Each leg costs its great-circle length times the
//! weight still on board; the score is the sum over all trips.

pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod runner;
pub mod setup;

pub use config::EvalOptions;
pub use domain::{GeoPoint, Solution, Stop, Trip, TripRecord};
pub use error::{CapacityViolation, EvalError};
pub use evaluation::{score, score_parallel, weighted_reindeer_weariness, weighted_trip_length};
