//! Network layer: wire types, envelope normalization, HTTP wrapper.

pub mod api;
pub mod envelope;
pub mod types;
