//! Shared types for the water-rights services.

pub mod bbox;
pub mod error;
pub mod geometry;

pub use bbox::BoundingBox;
pub use error::{WaterError, WaterResult};
pub use geometry::{Geometry, Shape, SRID_STORAGE, SRID_WGS84};
