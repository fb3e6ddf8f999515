//! Domain models for the Wardrobe Stylist Platform

mod outfit;
mod wardrobe;
mod weather;

pub use outfit::*;
pub use wardrobe::*;
pub use weather::*;
