use rayon::prelude::*;
use tracing::{debug, info, span, Level};

use crate::config::constant::WEIGHT_LIMIT;
use crate::config::EvalOptions;
use crate::domain::solution::Solution;
use crate::domain::types::TripRecord;
use crate::error::EvalError;
use crate::evaluation::capacity::check_capacity;
use crate::evaluation::trip::weighted_trip_length;

/// Total weighted reindeer weariness of a solution.
///
/// Fails with [`EvalError::CapacityExceeded`] before scoring anything if any
/// trip is heavier than `weight_limit`.
pub fn score(solution: &Solution, weight_limit: f64) -> Result<f64, EvalError> {
    score_with(
        solution,
        &EvalOptions {
            weight_limit,
            ..EvalOptions::default()
        },
    )
}

/// Same total as [`score`], trips scored on the rayon pool.
pub fn score_parallel(solution: &Solution, weight_limit: f64) -> Result<f64, EvalError> {
    score_with(
        solution,
        &EvalOptions {
            weight_limit,
            parallel: true,
            ..EvalOptions::default()
        },
    )
}

pub fn score_with(solution: &Solution, options: &EvalOptions) -> Result<f64, EvalError> {
    let eval_span = span!(
        Level::INFO,
        "score",
        trips = solution.num_trips(),
        parallel = options.parallel
    );
    let _guard = eval_span.enter();

    check_capacity(solution, options.weight_limit)?;

    let per_trip = trip_scores(solution, options.sleigh_weight, options.parallel);
    // summed in trip order so parallel and sequential runs agree bit for bit
    let total: f64 = per_trip.iter().sum();

    info!(
        "Scored {} trips ({} stops): {:.0}",
        solution.num_trips(),
        solution.num_stops(),
        total
    );
    Ok(total)
}

/// Per-trip weighted lengths, in trip order. Does not check capacity.
pub fn trip_scores(solution: &Solution, sleigh_weight: f64, parallel: bool) -> Vec<f64> {
    if parallel {
        solution
            .trips
            .par_iter()
            .map(|trip| weighted_trip_length(&trip.stops, sleigh_weight))
            .collect()
    } else {
        solution
            .trips
            .iter()
            .map(|trip| {
                let s = weighted_trip_length(&trip.stops, sleigh_weight);
                debug!("Trip {}: {} stops, score {:.2}", trip.trip_id, trip.stops.len(), s);
                s
            })
            .collect()
    }
}

/// Groups the joined table by TripId and scores it.
pub fn weighted_reindeer_weariness(
    records: &[TripRecord],
    weight_limit: f64,
) -> Result<f64, EvalError> {
    score(&Solution::from_records(records), weight_limit)
}

pub fn weighted_reindeer_weariness_default(records: &[TripRecord]) -> Result<f64, EvalError> {
    weighted_reindeer_weariness(records, WEIGHT_LIMIT)
}
