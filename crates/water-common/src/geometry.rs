//! SRID-tagged geometries with GeoJSON (de)serialization.
//!
//! Geometries are stored in EPSG:25832 (ETRS89 / UTM zone 32N) and exposed
//! to clients in EPSG:4326 (WGS84 longitude/latitude). The SRID travels next
//! to the shape instead of inside it because GeoJSON has no CRS member;
//! bodies parsed from requests default to 4326.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// SRID used by the store for usage location geometries.
pub const SRID_STORAGE: i32 = 25832;

/// SRID used for all geometries leaving the service.
pub const SRID_WGS84: i32 = 4326;

/// A GeoJSON geometry shape. Coordinates are `[x, y]` pairs, which for
/// EPSG:4326 means `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Point { coordinates: [f64; 2] },
    MultiPoint { coordinates: Vec<[f64; 2]> },
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

impl Shape {
    /// Visit every coordinate pair immutably.
    pub fn for_each_coordinate(&self, f: &mut impl FnMut(&[f64; 2])) {
        match self {
            Shape::Point { coordinates } => f(coordinates),
            Shape::MultiPoint { coordinates } | Shape::LineString { coordinates } => {
                coordinates.iter().for_each(f)
            }
            Shape::MultiLineString { coordinates } | Shape::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(f)
            }
            Shape::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().flatten().for_each(f)
            }
        }
    }

    /// Visit every coordinate pair mutably, in place.
    pub fn for_each_coordinate_mut(&mut self, f: &mut impl FnMut(&mut [f64; 2])) {
        match self {
            Shape::Point { coordinates } => f(coordinates),
            Shape::MultiPoint { coordinates } | Shape::LineString { coordinates } => {
                coordinates.iter_mut().for_each(f)
            }
            Shape::MultiLineString { coordinates } | Shape::Polygon { coordinates } => {
                coordinates.iter_mut().flatten().for_each(f)
            }
            Shape::MultiPolygon { coordinates } => {
                coordinates.iter_mut().flatten().flatten().for_each(f)
            }
        }
    }
}

/// A geometry together with the spatial reference it is expressed in.
///
/// Callers mutate geometries in place during reprojection; a geometry value
/// must therefore be exclusively owned by one task while it is transformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub srid: i32,
    pub shape: Shape,
}

impl Geometry {
    pub fn new(srid: i32, shape: Shape) -> Self {
        Self { srid, shape }
    }

    /// A point geometry, mostly useful in tests.
    pub fn point(srid: i32, x: f64, y: f64) -> Self {
        Self::new(srid, Shape::Point { coordinates: [x, y] })
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.shape.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    /// GeoJSON carries no CRS member, so deserialized geometries are WGS84.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shape = Shape::deserialize(deserializer)?;
        Ok(Self::new(SRID_WGS84, shape))
    }
}
