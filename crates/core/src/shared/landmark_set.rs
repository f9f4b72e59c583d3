use crate::shared::constants::LANDMARK_CARDINALITIES;

/// Ordered facial keypoints tied to one detection, in the same
/// working-frame coordinate space as the rect they belong to.
///
/// Shape models come in 5-point and 68-point variants; any other
/// cardinality is rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: Vec<(f64, f64)>,
}

impl LandmarkSet {
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, InvalidCardinality> {
        if !LANDMARK_CARDINALITIES.contains(&points.len()) {
            return Err(InvalidCardinality(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("landmark set must have 5 or 68 points, got {0}")]
pub struct InvalidCardinality(pub usize);
