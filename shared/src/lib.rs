//! Shared types and models for the Wardrobe Stylist Platform
//!
//! This crate contains types shared between the backend, frontend (via WASM),
//! and other components of the system, plus the pure outfit-suggestion
//! pipeline that both of them run.

pub mod models;
pub mod suggestion;
pub mod types;
pub mod validation;

pub use models::*;
pub use suggestion::*;
pub use types::*;
pub use validation::*;
