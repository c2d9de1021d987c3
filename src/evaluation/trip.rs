use crate::config::constant::SLEIGH_WEIGHT;
use crate::domain::types::{GeoPoint, Stop};

/// Weighted length of one trip: North Pole, every stop in the given order, back to the pole.
///
/// Each leg costs its length times the weight still on the sleigh. The sleigh
/// leaves fully loaded and comes home carrying only `sleigh_weight`.
pub fn weighted_trip_length(stops: &[Stop], sleigh_weight: f64) -> f64 {
    let north_pole = GeoPoint::north_pole();
    let full_load = stops.iter().map(|s| s.weight).sum::<f64>() + sleigh_weight;

    let (last_position, _, dist) = stops.iter().fold(
        (north_pole, full_load, 0.0),
        |(prev_position, prev_load, dist), stop| {
            let position = stop.position();
            (
                position,
                prev_load - stop.weight,
                dist + position.distance_to(&prev_position) * prev_load,
            )
        },
    );

    dist + north_pole.distance_to(&last_position) * sleigh_weight
}

pub fn weighted_trip_length_default(stops: &[Stop]) -> f64 {
    weighted_trip_length(stops, SLEIGH_WEIGHT)
}
