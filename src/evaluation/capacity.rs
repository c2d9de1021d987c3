use tracing::warn;

use crate::domain::solution::Solution;
use crate::error::{CapacityViolation, EvalError};

/// Trips whose total cargo weight is strictly above `weight_limit`, in trip order.
///
/// A total that is NaN cannot be shown to fit and is reported as a violation.
pub fn find_violations(solution: &Solution, weight_limit: f64) -> Vec<CapacityViolation> {
    solution
        .trips
        .iter()
        .map(|trip| (trip.trip_id, trip.total_weight()))
        .filter(|&(_, total_weight)| total_weight > weight_limit || total_weight.is_nan())
        .map(|(trip_id, total_weight)| CapacityViolation {
            trip_id,
            total_weight,
            weight_limit,
        })
        .collect()
}

/// Checks every trip before anything gets scored.
pub fn check_capacity(solution: &Solution, weight_limit: f64) -> Result<(), EvalError> {
    let violations = find_violations(solution, weight_limit);
    if violations.is_empty() {
        return Ok(());
    }

    for v in &violations {
        warn!("Sleigh over weight limit: {}", v);
    }
    Err(EvalError::CapacityExceeded { violations })
}
