use dialoguer::{Input, Select};

use crate::error::Result;
use crate::models::MenuItem;

/// What the user wants to do next in the interactive browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Category,
    Search,
    Toggle,
    Quit,
}

/// Prompt for the next browser action.
pub fn prompt_action() -> Result<BrowseAction> {
    let options = [
        "Choose category",
        "Search",
        "Expand / collapse an item",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options[..])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => BrowseAction::Category,
        1 => BrowseAction::Search,
        2 => BrowseAction::Toggle,
        _ => BrowseAction::Quit,
    })
}

/// Prompt for a category from the offered labels.
pub fn prompt_category(categories: &[String], current: &str) -> Result<String> {
    let default = categories.iter().position(|c| c == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Category")
        .items(categories)
        .default(default)
        .interact()?;

    Ok(categories[selection].clone())
}

/// Prompt for a search query. An empty answer clears the search.
pub fn prompt_search(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search (name, description, or ingredient; empty to clear)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for which visible item to toggle. Returns `None` when nothing is
/// visible or the user backs out.
pub fn prompt_toggle(items: &[&MenuItem], expanded_id: Option<&str>) -> Result<Option<String>> {
    if items.is_empty() {
        println!("No items to expand.");
        return Ok(None);
    }

    let mut options: Vec<String> = items
        .iter()
        .map(|item| {
            let marker = if expanded_id == Some(item.id.as_str()) { "▲" } else { "▼" };
            format!("{} {}", marker, item.name)
        })
        .collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Toggle which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(items.get(selection).map(|item| item.id.clone()))
}
