//! Controls how card data is represented.

pub mod card;
pub mod stats;

pub use card::CardData;
pub use stats::{FeaturedStats, StatKey};
