use serde::Deserialize;

use crate::domain::types::{GiftId, TripId};

/// Row of the gift catalog (`GiftId,Latitude,Longitude,Weight`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Gift {
    #[serde(rename = "GiftId")]
    pub gift_id: GiftId,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
}

/// Row of a proposed solution (`GiftId,TripId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    #[serde(rename = "GiftId")]
    pub gift_id: GiftId,
    #[serde(rename = "TripId")]
    pub trip_id: TripId,
}
