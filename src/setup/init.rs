use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, info, span, Level};
use zip::ZipArchive;

use crate::domain::types::{GiftId, TripRecord};
use crate::error::EvalError;
use crate::setup::init_types::{Assignment, Gift};

fn read_rows<T, R>(reader: R) -> Result<Vec<T>, EvalError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn read_gifts_from<R: Read>(reader: R) -> Result<Vec<Gift>, EvalError> {
    let gifts: Vec<Gift> = read_rows(reader)?;
    for gift in &gifts {
        validate_gift(gift)?;
    }
    Ok(gifts)
}

pub fn read_assignments_from<R: Read>(reader: R) -> Result<Vec<Assignment>, EvalError> {
    read_rows(reader)
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Opens `path` and hands its CSV content to `parse`.
/// For a `.zip` archive that is the first file entry.
fn read_input<T, F>(path: &Path, parse: F) -> Result<T, EvalError>
where
    F: FnOnce(&mut dyn Read) -> Result<T, EvalError>,
{
    let mut file = File::open(path)?;
    if !is_zip(path) {
        return parse(&mut file);
    }

    let mut archive = ZipArchive::new(file)?;
    let index = (0..archive.len())
        .find(|&i| archive.by_index(i).map(|e| !e.is_dir()).unwrap_or(false))
        .ok_or_else(|| EvalError::EmptyArchive {
            path: path.to_path_buf(),
        })?;
    let mut entry = archive.by_index(index)?;
    debug!("Reading {} from archive {}", entry.name(), path.display());
    parse(&mut entry)
}

/// Reads the gift catalog, plain CSV or zipped.
pub fn read_gifts(path: &Path) -> Result<Vec<Gift>, EvalError> {
    debug!("Reading gifts from {}", path.display());
    let gifts = read_input(path, |reader| read_gifts_from(reader))?;
    info!("Loaded {} gifts from {}", gifts.len(), path.display());
    Ok(gifts)
}

/// Reads the solution, plain CSV or zipped.
pub fn read_assignments(path: &Path) -> Result<Vec<Assignment>, EvalError> {
    debug!("Reading solution from {}", path.display());
    let assignments = read_input(path, |reader| read_assignments_from(reader))?;
    info!(
        "Loaded {} gift assignments from {}",
        assignments.len(),
        path.display()
    );
    Ok(assignments)
}

fn validate_gift(gift: &Gift) -> Result<(), EvalError> {
    let invalid = |reason: String| EvalError::InvalidRecord {
        gift_id: gift.gift_id,
        reason,
    };

    if !gift.latitude.is_finite() || !(-90.0..=90.0).contains(&gift.latitude) {
        return Err(invalid(format!("latitude {} out of range", gift.latitude)));
    }
    if !gift.longitude.is_finite() || !(-180.0..=180.0).contains(&gift.longitude) {
        return Err(invalid(format!("longitude {} out of range", gift.longitude)));
    }
    if !gift.weight.is_finite() || gift.weight < 0.0 {
        return Err(invalid(format!("weight {} is not a non-negative number", gift.weight)));
    }
    Ok(())
}

/// Inner join of the solution with the catalog on GiftId, in solution row order.
/// A GiftId listed twice in the catalog is rejected.
pub fn join_trips(assignments: &[Assignment], gifts: &[Gift]) -> Result<Vec<TripRecord>, EvalError> {
    let mut catalog: HashMap<GiftId, &Gift> = HashMap::with_capacity(gifts.len());
    for gift in gifts {
        if catalog.insert(gift.gift_id, gift).is_some() {
            return Err(EvalError::InvalidRecord {
                gift_id: gift.gift_id,
                reason: "duplicate GiftId in gift catalog".to_string(),
            });
        }
    }

    assignments
        .iter()
        .map(|a| -> Result<TripRecord, EvalError> {
            let gift = catalog
                .get(&a.gift_id)
                .ok_or_else(|| EvalError::UnknownGift { gift_id: a.gift_id })?;
            Ok(TripRecord {
                trip_id: a.trip_id,
                gift_id: a.gift_id,
                latitude: gift.latitude,
                longitude: gift.longitude,
                weight: gift.weight,
            })
        })
        .collect()
}

pub fn load_trip_records(gifts_path: &Path, solution_path: &Path) -> Result<Vec<TripRecord>, EvalError> {
    let load_span = span!(Level::INFO, "load");
    let _guard = load_span.enter();

    let gifts = read_gifts(gifts_path)?;
    let assignments = read_assignments(solution_path)?;
    let records = join_trips(&assignments, &gifts)?;

    info!("Joined {} trip records", records.len());
    Ok(records)
}
