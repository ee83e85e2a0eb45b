pub mod calories;
pub mod constants;
pub mod filter;
pub mod suggest;

pub use calories::effective_calories;
pub use constants::*;
pub use filter::{
    effective_category, filter_indices, filter_items, in_category, list_categories,
    matches_query, normalize_query,
};
pub use suggest::suggest_category;
