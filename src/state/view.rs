use crate::catalog::ALL_CATEGORIES;

/// Single-selection transition: toggling the expanded item collapses it,
/// toggling any other item expands that one instead.
pub fn toggle_expansion(current: Option<&str>, target: &str) -> Option<String> {
    match current {
        Some(id) if id == target => None,
        _ => Some(target.to_string()),
    }
}

/// Input signals from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SelectCategory(String),
    Search(String),
    Toggle(String),
}

/// Transient browsing state of one view instance.
///
/// Replaced, never mutated, on each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected_category: String,
    pub search_query: String,
    pub expanded_id: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            expanded_id: None,
        }
    }
}

impl ViewState {
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            selected_category: category.to_string(),
            ..self.clone()
        }
    }

    pub fn with_search(&self, query: &str) -> Self {
        Self {
            search_query: query.to_string(),
            ..self.clone()
        }
    }

    pub fn toggled(&self, id: &str) -> Self {
        Self {
            expanded_id: toggle_expansion(self.expanded_id.as_deref(), id),
            ..self.clone()
        }
    }

    /// State after applying one input signal.
    pub fn apply(&self, event: &ViewEvent) -> Self {
        match event {
            ViewEvent::SelectCategory(category) => self.with_category(category),
            ViewEvent::Search(query) => self.with_search(query),
            ViewEvent::Toggle(id) => self.toggled(id),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expansion_transitions() {
        assert_eq!(toggle_expansion(None, "3"), Some("3".to_string()));
        assert_eq!(toggle_expansion(Some("3"), "3"), None);
        assert_eq!(toggle_expansion(Some("3"), "5"), Some("5".to_string()));
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.selected_category, "All");
        assert!(state.search_query.is_empty());
        assert!(state.expanded_id.is_none());
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let state = ViewState::default();
        let next = state.apply(&ViewEvent::SelectCategory("Dosa".to_string()));

        assert_eq!(state.selected_category, "All");
        assert_eq!(next.selected_category, "Dosa");
        assert_eq!(next.search_query, state.search_query);
    }

    #[test]
    fn test_toggle_keeps_filters() {
        let state = ViewState::default().with_search("chai").toggled("6");
        assert_eq!(state.search_query, "chai");
        assert!(state.is_expanded("6"));
        assert!(!state.is_expanded("1"));
    }
}
