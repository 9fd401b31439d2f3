//! Response types for the water-rights API.
//!
//! Usage locations leave the service as GeoJSON `FeatureCollection`s with
//! an accumulated bounding box; failures leave it as RFC 7807 style
//! problem-detail documents.

pub mod geojson;
pub mod responses;

pub use geojson::{exposed_virtual, Feature, FeatureCollection};
pub use responses::{Problem, WaterRightDetails};
