//! Database models for the Wardrobe Stylist Platform
//!
//! Re-exports the domain models from the shared crate; row structs live
//! next to the services that query them

pub use shared::models::*;
