//! Business logic services for the Wardrobe Stylist Platform

pub mod outfit;
pub mod suggestion;
pub mod wardrobe;
pub mod weather;

pub use outfit::OutfitService;
pub use suggestion::SuggestionService;
pub use wardrobe::WardrobeService;
pub use weather::WeatherService;
