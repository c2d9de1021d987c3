use serde::Deserialize;

use crate::config::constant::NORTH_POLE;
use crate::distance::haversine::haversine;

pub type TripId = i64;
pub type GiftId = i64;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn north_pole() -> Self {
        Self::new(NORTH_POLE.0, NORTH_POLE.1)
    }

    /// Great-circle distance in km.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// One delivery: where the gift goes and how much it weighs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub gift_id: GiftId,
    pub latitude: f64,
    pub longitude: f64,
    pub weight: f64,
}

impl Stop {
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// One row of the joined (solution x gift catalog) table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "TripId")]
    pub trip_id: TripId,
    #[serde(rename = "GiftId")]
    pub gift_id: GiftId,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
}

impl TripRecord {
    pub const fn stop(&self) -> Stop {
        Stop {
            gift_id: self.gift_id,
            latitude: self.latitude,
            longitude: self.longitude,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub trip_id: TripId,
    pub stops: Vec<Stop>,
}

impl Trip {
    pub fn total_weight(&self) -> f64 {
        self.stops.iter().map(|s| s.weight).sum()
    }
}
