use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::types::GeoPoint;
use crate::error::EvalError;

/// Row-major all-pairs great-circle distances (km).
///
/// Library API for callers that want every pairwise distance up front. Trip
/// scoring itself calls [`crate::distance::haversine`] leg by leg and never
/// builds a matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let size = points.len();
        info!("Creating {}x{} haversine distance matrix", size, size);

        let distances: Vec<f64> = points
            .par_iter()
            .flat_map_iter(|from| points.iter().map(move |to| from.distance_to(to)))
            .collect();

        debug!("Distance matrix holds {} entries", distances.len());
        Self { size, distances }
    }

    /// Element-wise distance between `from[i]` and `to[i]`.
    pub fn paired(from: &[GeoPoint], to: &[GeoPoint]) -> Result<Vec<f64>, EvalError> {
        if from.len() != to.len() {
            return Err(EvalError::LengthMismatch {
                left: from.len(),
                right: to.len(),
            });
        }
        Ok(from
            .par_iter()
            .zip(to.par_iter())
            .map(|(a, b)| a.distance_to(b))
            .collect())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.distances.get(from * self.size + to).copied()
    }

    pub fn row(&self, from: usize) -> Option<&[f64]> {
        if from >= self.size {
            return None;
        }
        self.distances.get(from * self.size..(from + 1) * self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine::haversine;

    fn points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::north_pole(),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(51.5, -0.12),
            GeoPoint::new(-33.9, 151.2),
        ]
    }

    #[test]
    fn test_matrix_matches_haversine() {
        let pts = points();
        let dm = DistanceMatrix::from_points(&pts);
        assert_eq!(dm.size(), 4);

        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate() {
                let expected = haversine(a.latitude, a.longitude, b.latitude, b.longitude);
                assert_eq!(dm.get(i, j), Some(expected));
            }
        }
    }

    #[test]
    fn test_matrix_zero_diagonal_and_symmetric() {
        let dm = DistanceMatrix::from_points(&points());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), Some(0.0));
            for j in 0..dm.size() {
                let diff = dm.get(i, j).unwrap() - dm.get(j, i).unwrap();
                assert!(diff.abs() < 1e-9);
            }
        }
        assert_eq!(dm.row(1).map(|r| r.len()), Some(4));
    }

    #[test]
    fn test_out_of_range_lookup() {
        let dm = DistanceMatrix::from_points(&points());
        assert_eq!(dm.get(4, 0), None);
        assert_eq!(dm.get(0, 4), None);
        assert!(dm.row(4).is_none());
    }

    #[test]
    fn test_paired_distances() {
        let from = vec![GeoPoint::north_pole(), GeoPoint::new(10.0, 10.0)];
        let to = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)];
        let d = DistanceMatrix::paired(&from, &to).unwrap();
        assert_eq!(d.len(), 2);
        assert!((d[0] - 10007.543398010286).abs() < 1e-6);
        assert_eq!(d[1], 0.0);
    }

    #[test]
    fn test_paired_length_mismatch() {
        let from = vec![GeoPoint::north_pole()];
        let err = DistanceMatrix::paired(&from, &[]).unwrap_err();
        assert!(matches!(err, EvalError::LengthMismatch { left: 1, right: 0 }));
    }
}
