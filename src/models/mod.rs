mod item;
mod sample;

pub use item::{Ingredient, MenuItem};
pub use sample::sample_catalog;
