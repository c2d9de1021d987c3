use std::collections::HashMap;

use crate::domain::types::{Trip, TripId, TripRecord};

/// Every trip of a proposed solution, in order of first appearance of its TripId.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    pub trips: Vec<Trip>,
}

impl Solution {
    /// Partition joined records by TripId. Stops keep the order they were given in.
    pub fn from_records(records: &[TripRecord]) -> Self {
        let mut trips: Vec<Trip> = vec![];
        let mut index_of: HashMap<TripId, usize> = HashMap::new();

        for record in records {
            let ind = *index_of.entry(record.trip_id).or_insert_with(|| {
                trips.push(Trip {
                    trip_id: record.trip_id,
                    stops: vec![],
                });
                trips.len() - 1
            });
            trips[ind].stops.push(record.stop());
        }

        Self { trips }
    }

    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    pub fn num_stops(&self) -> usize {
        self.trips.iter().map(|t| t.stops.len()).sum()
    }

    pub fn trip(&self, trip_id: TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| t.trip_id == trip_id)
    }
}

impl From<Vec<Trip>> for Solution {
    fn from(trips: Vec<Trip>) -> Self {
        Self { trips }
    }
}
