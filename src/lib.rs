pub mod catalog;
pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{Ingredient, MenuItem};
pub use state::{MenuCatalogView, ViewEvent, ViewState};
