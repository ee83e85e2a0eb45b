use tracing::debug;

use crate::catalog::{effective_calories, filter_indices, list_categories, normalize_query};
use crate::models::MenuItem;
use crate::state::view::{ViewEvent, ViewState};

/// Filter inputs the visible list depends on. The query is stored normalized
/// so whitespace-only edits don't trigger recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    category: String,
    needle: Option<String>,
}

impl FilterKey {
    fn from_state(state: &ViewState) -> Self {
        Self {
            category: state.selected_category.clone(),
            needle: normalize_query(&state.search_query),
        }
    }
}

/// Owns a read-only catalog and the current browsing state, and derives the
/// category list and the visible items from them.
pub struct MenuCatalogView {
    catalog: Vec<MenuItem>,
    /// Computed once; the catalog never changes.
    categories: Vec<String>,
    state: ViewState,
    key: FilterKey,
    /// Catalog positions of the visible items.
    visible: Vec<usize>,
}

impl MenuCatalogView {
    /// Create a view over a catalog, starting from the default state.
    pub fn new(catalog: Vec<MenuItem>) -> Self {
        Self::with_state(catalog, ViewState::default())
    }

    /// Create a view over a catalog, starting from a given state.
    pub fn with_state(catalog: Vec<MenuItem>, state: ViewState) -> Self {
        let categories = list_categories(&catalog);
        let key = FilterKey::from_state(&state);
        let visible = filter_indices(&catalog, &state.selected_category, &state.search_query);

        Self {
            catalog,
            categories,
            state,
            key,
            visible,
        }
    }

    /// Apply one input signal, recomputing the visible list only if the
    /// filter inputs changed.
    pub fn dispatch(&mut self, event: ViewEvent) {
        debug!(?event, "dispatch");
        let next = self.state.apply(&event);
        self.set_state(next);
    }

    /// Replace the whole browsing state.
    pub fn set_state(&mut self, state: ViewState) {
        let key = FilterKey::from_state(&state);
        if key != self.key {
            self.visible =
                filter_indices(&self.catalog, &state.selected_category, &state.search_query);
            debug!(
                category = %key.category,
                needle = ?key.needle,
                visible = self.visible.len(),
                "recomputed visible items"
            );
            self.key = key;
        }
        self.state = state;
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &[MenuItem] {
        &self.catalog
    }

    /// `All` followed by each distinct category in first-occurrence order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items passing the current filters, in catalog order.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.visible.iter().map(|&idx| &self.catalog[idx]).collect()
    }

    /// Visible items paired with their effective calorie totals.
    pub fn visible_with_calories(&self) -> Vec<(&MenuItem, i64)> {
        self.visible
            .iter()
            .map(|&idx| {
                let item = &self.catalog[idx];
                (item, effective_calories(item))
            })
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// True when the current filters leave nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// Look up an item by id (first match).
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.catalog.iter().find(|item| item.id == id)
    }

    /// The expanded item, if any. Expansion is independent of the filters,
    /// so this may be an item that is not currently visible.
    pub fn expanded_item(&self) -> Option<&MenuItem> {
        self.state
            .expanded_id
            .as_deref()
            .and_then(|id| self.find_item(id))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.is_expanded(id)
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
