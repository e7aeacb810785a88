//! HTTP middleware module.

pub mod cors;

pub use cors::create_permissive_cors_layer;
