//! Coordinate reference system transformations.
//!
//! Implements the projections needed by the water-rights services from
//! scratch. Stored geometries arrive in EPSG:25832 (ETRS89 / UTM zone 32N)
//! and leave the service in EPSG:4326 (WGS84 longitude/latitude).

pub mod utm;

use std::fmt;
use water_common::{Geometry, SRID_STORAGE, SRID_WGS84};

pub use utm::UtmZone;

/// Projection failures.
#[derive(Debug)]
pub enum ProjectionError {
    UnsupportedTransform { source: i32, target: i32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::UnsupportedTransform { source, target } => write!(
                f,
                "No transform implemented from SRID {source} to SRID {target}"
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Reproject a geometry into the target SRID, mutating it in place.
///
/// A geometry already in the target SRID is returned untouched, without a
/// transform pass, so coordinates suffer no floating-point drift. The
/// caller must own the geometry exclusively while it is transformed.
pub fn reproject_in_place(
    geometry: &mut Geometry,
    target: i32,
) -> Result<(), ProjectionError> {
    if geometry.srid == target {
        return Ok(());
    }

    match (geometry.srid, target) {
        (SRID_STORAGE, SRID_WGS84) => {
            let zone = UtmZone::zone_32n();
            geometry.shape.for_each_coordinate_mut(&mut |c| {
                let (lon, lat) = zone.to_geographic(c[0], c[1]);
                c[0] = lon;
                c[1] = lat;
            });
        }
        (SRID_WGS84, SRID_STORAGE) => {
            let zone = UtmZone::zone_32n();
            geometry.shape.for_each_coordinate_mut(&mut |c| {
                let (easting, northing) = zone.from_geographic(c[0], c[1]);
                c[0] = easting;
                c[1] = northing;
            });
        }
        (source, target) => {
            return Err(ProjectionError::UnsupportedTransform { source, target })
        }
    }

    geometry.srid = target;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_common::Shape;

    #[test]
    fn test_same_srid_is_identity() {
        let mut geometry = Geometry::point(SRID_WGS84, 9.73, 52.37);
        let before = geometry.clone();
        reproject_in_place(&mut geometry, SRID_WGS84).unwrap();
        assert_eq!(geometry, before);
    }

    #[test]
    fn test_storage_to_wgs84_rewrites_srid_and_coordinates() {
        let mut geometry = Geometry::point(SRID_STORAGE, 550_000.0, 5_800_000.0);
        reproject_in_place(&mut geometry, SRID_WGS84).unwrap();

        assert_eq!(geometry.srid, SRID_WGS84);
        match geometry.shape {
            Shape::Point { coordinates } => {
                let [lon, lat] = coordinates;
                assert!((9.4..10.1).contains(&lon), "lon {}", lon);
                assert!((52.0..52.7).contains(&lat), "lat {}", lat);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_every_coordinate_is_transformed() {
        let mut geometry = Geometry::new(
            SRID_STORAGE,
            Shape::MultiPoint {
                coordinates: vec![[500_000.0, 5_800_000.0], [560_000.0, 5_900_000.0]],
            },
        );
        reproject_in_place(&mut geometry, SRID_WGS84).unwrap();

        match geometry.shape {
            Shape::MultiPoint { ref coordinates } => {
                for c in coordinates {
                    assert!(c[0].abs() < 20.0, "expected degrees, got {}", c[0]);
                    assert!(c[1] > 50.0 && c[1] < 55.0, "expected degrees, got {}", c[1]);
                }
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_unsupported_pair_fails() {
        let mut geometry = Geometry::point(3857, 1_000_000.0, 6_800_000.0);
        let err = reproject_in_place(&mut geometry, SRID_WGS84).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::UnsupportedTransform {
                source: 3857,
                target: 4326
            }
        ));
        // The geometry is left untouched on failure.
        assert_eq!(geometry.srid, 3857);
    }
}
