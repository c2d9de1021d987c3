use std::error::Error;
use std::path::Path;

use csv::Writer;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::TripId;
use crate::setup::init_types::{Assignment, Gift};

/// Random gifts spread over the globe, weights in [1, 50].
pub fn generate_gifts(count: usize, seed: u64) -> Vec<Gift> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (1..=count)
        .map(|gift_id| Gift {
            gift_id: gift_id as i64,
            latitude: rng.gen_range(-60.0..=85.0),
            longitude: rng.gen_range(-180.0..=180.0),
            weight: rng.gen_range(1.0..=50.0),
        })
        .collect()
}

/// Packs the gifts, in a shuffled order, into trips that stay within `weight_limit`.
///
/// A gift heavier than the limit still gets a trip of its own.
pub fn generate_solution(gifts: &[Gift], weight_limit: f64, seed: u64) -> Vec<Assignment> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<&Gift> = gifts.iter().collect();
    order.shuffle(&mut rng);

    let mut assignments = Vec::with_capacity(gifts.len());
    let mut trip_id: TripId = 0;
    let mut load = 0.0;

    for gift in order {
        if load > 0.0 && load + gift.weight > weight_limit {
            trip_id += 1;
            load = 0.0;
        }
        load += gift.weight;
        assignments.push(Assignment {
            gift_id: gift.gift_id,
            trip_id,
        });
    }

    info!(
        "Generated solution with {} trips for {} gifts",
        trip_id + 1,
        gifts.len()
    );
    assignments
}

pub fn write_gifts_csv(gifts: &[Gift], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["GiftId", "Latitude", "Longitude", "Weight"])?;
    for gift in gifts {
        wtr.write_record([
            gift.gift_id.to_string(),
            gift.latitude.to_string(),
            gift.longitude.to_string(),
            gift.weight.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_solution_csv(assignments: &[Assignment], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["GiftId", "TripId"])?;
    for a in assignments {
        wtr.write_record([a.gift_id.to_string(), a.trip_id.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
