pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_category, prompt_search, prompt_toggle, BrowseAction,
};
pub use render::{
    display_categories, display_ingredients, display_item_detail, display_items, display_no_items,
    display_view,
};
