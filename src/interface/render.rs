use crate::catalog::{effective_calories, effective_category};
use crate::models::MenuItem;
use crate::state::MenuCatalogView;

/// Display the category filter bar, marking the selected one.
pub fn display_categories(categories: &[String], selected: &str) {
    let labels: Vec<String> = categories
        .iter()
        .map(|c| {
            if c == selected {
                format!("[{}]", c)
            } else {
                c.clone()
            }
        })
        .collect();

    println!("Categories: {}", labels.join("  "));
}

/// Display menu items paired with their effective calories.
pub fn display_items(items: &[(&MenuItem, i64)], expanded_id: Option<&str>) {
    if items.is_empty() {
        display_no_items();
        return;
    }

    println!();

    // Find max name length for alignment
    let max_name_len = items
        .iter()
        .map(|(i, _)| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for (item, calories) in items {
        let expanded = expanded_id == Some(item.id.as_str());
        let marker = if expanded { "▲" } else { "▼" };

        println!(
            "{} {:>3}. {:<width$}  {:>12}  {:>5} kcal  ({})",
            marker,
            item.id,
            item.name,
            item.price,
            calories,
            effective_category(item),
            width = max_name_len
        );

        if let Some(description) = &item.description {
            println!("         {}", description);
        }

        if expanded {
            display_ingredients(item, *calories);
        }
    }

    let total: i64 = items.iter().map(|(_, c)| c).sum();

    println!();
    println!("{} items, {} kcal combined", items.len(), total);
    println!();
}

/// Empty state shown when the filters leave nothing.
pub fn display_no_items() {
    println!();
    println!("No items found.");
    println!();
}

/// Display an item's ingredient breakdown and its total.
pub fn display_ingredients(item: &MenuItem, total_calories: i64) {
    println!("         Ingredients");

    if item.has_ingredients() {
        let max_name_len = item
            .ingredients
            .iter()
            .map(|i| i.name.chars().count())
            .max()
            .unwrap_or(10);

        for ing in &item.ingredients {
            println!(
                "           {:<width$} · {:>6}  {:>5} kcal",
                ing.name,
                ing.amount,
                ing.calories,
                width = max_name_len
            );
        }
    } else {
        println!("           No ingredient details");
    }

    println!("         Total Calories: {} kcal", total_calories);
}

/// Display a single item fully expanded.
pub fn display_item_detail(item: &MenuItem) {
    println!();
    println!("=== {} ===", item.name);
    println!("Price: {}", item.price);
    println!("Category: {}", effective_category(item));
    if let Some(description) = &item.description {
        println!("{}", description);
    }
    println!();
    display_ingredients(item, effective_calories(item));
    println!();
}

/// Display the whole view: category bar, active search, visible items.
pub fn display_view(view: &MenuCatalogView) {
    let state = view.state();

    println!();
    display_categories(view.categories(), &state.selected_category);

    let query = state.search_query.trim();
    if !query.is_empty() {
        println!("Search: \"{}\"", query);
    }

    if view.is_empty_result() {
        display_no_items();
        return;
    }

    display_items(&view.visible_with_calories(), state.expanded_id.as_deref());
}
