//! Parser for PostgreSQL composite-type and array-of-composite text literals.
//!
//! Some columns in the water-rights store are composite types that arrive as
//! structured text such as `(12.5,"m³")` or
//! `{"(1,\"l\",\"01:00:00\")","(2,\"m³\",\"1 day\")"}`. This crate decodes
//! that grammar into plain field lists which the domain crate then turns
//! into typed records.
//!
//! The scanner is a small hand-written recursive descent over the wire
//! grammar. It is pure and stateless: nothing is compiled or cached per
//! process, and every call works only on its own input. A decode either
//! yields every field of the target shape or fails with a classified
//! [`DecodeError`]; partially decoded records cannot be observed.

pub mod array;
pub mod composite;
pub mod error;
pub mod scan;

pub use array::parse_array;
pub use composite::{parse_composite, Fields};
pub use error::DecodeError;
pub use scan::ScanInput;
