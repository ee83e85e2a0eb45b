use std::collections::HashSet;

use crate::catalog::constants::{ALL_CATEGORIES, UNCATEGORIZED};
use crate::models::MenuItem;

/// Category an item is bucketed under, with the `Uncategorized` fallback.
#[inline]
pub fn effective_category(item: &MenuItem) -> &str {
    item.category.as_deref().unwrap_or(UNCATEGORIZED)
}

/// Filter choices for a catalog: `All` first, then each distinct effective
/// category in order of first occurrence.
pub fn list_categories(catalog: &[MenuItem]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for item in catalog {
        let category = effective_category(item);
        if seen.insert(category) {
            categories.push(category.to_string());
        }
    }

    categories
}

/// Trim and lower-case a search query. Blank queries yield `None`.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether an item matches an already normalized search needle.
///
/// Substring match against the name, the description, or any ingredient name.
pub fn matches_query(item: &MenuItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || item
            .ingredients
            .iter()
            .any(|ing| ing.name.to_lowercase().contains(needle))
}

/// Whether an item passes the category filter.
#[inline]
pub fn in_category(item: &MenuItem, selected_category: &str) -> bool {
    selected_category == ALL_CATEGORIES || effective_category(item) == selected_category
}

/// Positions of the catalog entries surviving both filters, in catalog order.
pub fn filter_indices(catalog: &[MenuItem], selected_category: &str, query: &str) -> Vec<usize> {
    let needle = normalize_query(query);

    catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| in_category(item, selected_category))
        .filter(|(_, item)| match &needle {
            Some(needle) => matches_query(item, needle),
            None => true,
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Items surviving the category and search filters, in catalog order.
///
/// The result is empty rather than absent when nothing matches.
pub fn filter_items<'a>(
    catalog: &'a [MenuItem],
    selected_category: &str,
    query: &str,
) -> Vec<&'a MenuItem> {
    filter_indices(catalog, selected_category, query)
        .into_iter()
        .map(|idx| &catalog[idx])
        .collect()
}
