use std::fmt;
use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

use crate::domain::types::{GiftId, TripId};

/// A trip whose cargo is heavier than the sleigh may carry.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityViolation {
    pub trip_id: TripId,
    pub total_weight: f64,
    pub weight_limit: f64,
}

impl fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trip {} carries {:.2} (limit {:.2})",
            self.trip_id, self.total_weight, self.weight_limit
        )
    }
}

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("{} sleigh(s) over weight limit: {}", .violations.len(), format_violations(.violations))]
    CapacityExceeded { violations: Vec<CapacityViolation> },
    #[error("Solution references gift {gift_id} which is not in the gift catalog")]
    UnknownGift { gift_id: GiftId },
    #[error("Invalid record for gift {gift_id}: {reason}")]
    InvalidRecord { gift_id: GiftId, reason: String },
    #[error("Paired inputs differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("Invalid value {value:?} for {key}")]
    Config { key: String, value: String },
    #[error("Archive {} contains no file", .path.display())]
    EmptyArchive { path: PathBuf },
    #[error("Failed to read zip archive")]
    Zip(#[from] zip::result::ZipError),
    #[error("Failed to read CSV input")]
    Csv(#[from] csv::Error),
    #[error("Failed to open input file")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Trips that broke the capacity limit, empty for every other error.
    pub fn violations(&self) -> &[CapacityViolation] {
        match self {
            EvalError::CapacityExceeded { violations } => violations,
            _ => &[],
        }
    }
}

fn format_violations(violations: &[CapacityViolation]) -> String {
    violations.iter().join(", ")
}
