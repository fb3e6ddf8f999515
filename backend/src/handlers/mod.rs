//! HTTP handlers for the Wardrobe Stylist Platform

pub mod health;
pub mod outfit;
pub mod suggestion;
pub mod wardrobe;
pub mod weather;

pub use health::health_check;
pub use outfit::{delete_outfit, get_outfit, list_outfits, mark_used, rate_outfit, save_outfit};
pub use suggestion::get_suggestions;
pub use wardrobe::{create_item, delete_item, get_item, list_items, mark_worn, update_item};
pub use weather::current_weather;
