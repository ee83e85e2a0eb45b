mod catalog_view;
mod persistence;
mod view;

pub use catalog_view::MenuCatalogView;
pub use persistence::{load_catalog, save_catalog};
pub use view::{toggle_expansion, ViewEvent, ViewState};
