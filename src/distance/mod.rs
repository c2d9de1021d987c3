pub mod haversine;
pub mod matrix;

pub use haversine::haversine;
pub use matrix::DistanceMatrix;
