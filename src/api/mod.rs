//! # API Layer
//!
//! Transport adapters. This is the only layer that knows about wire-level
//! status codes; the core services hand it typed domain errors and nothing
//! else.

pub mod rest;

pub use rest::{AppState, create_router};
