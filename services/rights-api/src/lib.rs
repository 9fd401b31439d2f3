//! Water Rights API Service Library
//!
//! This crate provides the HTTP server exposing regulatory water right and
//! usage location records.

pub mod handlers;
pub mod state;
