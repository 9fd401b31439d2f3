//! Bounding box accumulation for feature collections.

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// An axis-aligned bounding box.
///
/// Starts out empty (inverted bounds) and adopts the extent of the first
/// geometry it is extended with, matching GeoJSON `bbox` accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// An empty box that any extension will snap to.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// True until the box has been extended at least once.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow the box to include a single coordinate.
    pub fn extend(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Grow the box to include every coordinate of a geometry.
    pub fn extend_geometry(&mut self, geometry: &Geometry) {
        geometry
            .shape
            .for_each_coordinate(&mut |c| self.extend(c[0], c[1]));
    }

    /// GeoJSON `bbox` member: `[min_x, min_y, max_x, max_y]`, absent while
    /// the box is still empty.
    pub fn to_array(&self) -> Option<[f64; 4]> {
        if self.is_empty() {
            return None;
        }
        Some([self.min_x, self.min_y, self.max_x, self.max_y])
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Shape, SRID_WGS84};

    #[test]
    fn test_empty_box_has_no_array() {
        let bbox = BoundingBox::empty();
        assert!(bbox.is_empty());
        assert_eq!(bbox.to_array(), None);
    }

    #[test]
    fn test_first_extension_adopts_extent() {
        let mut bbox = BoundingBox::empty();
        bbox.extend(9.5, 52.5);
        assert!(!bbox.is_empty());
        assert_eq!(bbox.to_array(), Some([9.5, 52.5, 9.5, 52.5]));
    }

    #[test]
    fn test_extend_geometry() {
        let geometry = Geometry::new(
            SRID_WGS84,
            Shape::LineString {
                coordinates: vec![[9.0, 53.0], [10.0, 52.0]],
            },
        );

        let mut bbox = BoundingBox::empty();
        bbox.extend_geometry(&geometry);
        assert_eq!(bbox.to_array(), Some([9.0, 52.0, 10.0, 53.0]));
    }

    #[test]
    fn test_extend_keeps_existing_bounds() {
        let mut bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        bbox.extend(5.0, 5.0);
        assert_eq!(bbox.to_array(), Some([0.0, 0.0, 10.0, 10.0]));
    }
}
