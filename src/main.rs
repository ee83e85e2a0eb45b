use std::path::Path;

use clap::Parser;
use tracing::warn;

use menu_browser_rs::catalog::suggest_category;
use menu_browser_rs::cli::{Cli, Command, FilterArgs};
use menu_browser_rs::error::{MenuError, Result};
use menu_browser_rs::export::export_csv;
use menu_browser_rs::interface::{
    display_categories, display_item_detail, display_view, prompt_action, prompt_category,
    prompt_search, prompt_toggle, BrowseAction,
};
use menu_browser_rs::logging::setup_tracing;
use menu_browser_rs::models::{sample_catalog, MenuItem};
use menu_browser_rs::state::{load_catalog, save_catalog, MenuCatalogView, ViewEvent, ViewState};

fn main() {
    setup_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Browse => cmd_browse(&cli.file),
        Command::Categories => cmd_categories(&cli.file),
        Command::List { filter } => cmd_list(&cli.file, &filter),
        Command::Show { id } => cmd_show(&cli.file, &id),
        Command::Export { out, filter } => cmd_export(&cli.file, &out, &filter),
        Command::Sample { force } => cmd_sample(&cli.file, force),
    }
}

/// Load the catalog, falling back to the built-in sample menu when the file
/// doesn't exist.
fn open_catalog(path: &Path) -> Result<Vec<MenuItem>> {
    if !path.exists() {
        eprintln!(
            "Menu file not found: {} (showing the sample menu; run 'sample' to create it)",
            path.display()
        );
        return Ok(sample_catalog());
    }

    load_catalog(path)
}

/// Build a view with the requested filters applied.
fn filtered_view(path: &Path, filter: &FilterArgs) -> Result<MenuCatalogView> {
    let view = MenuCatalogView::with_state(
        open_catalog(path)?,
        ViewState::default()
            .with_category(&filter.category)
            .with_search(&filter.search),
    );

    let known = view.categories().iter().any(|c| c == &filter.category);
    if !known {
        warn!(category = %filter.category, "unknown category");
        match suggest_category(view.categories(), &filter.category) {
            Some(suggestion) => eprintln!(
                "No category named '{}'. Did you mean '{}'?",
                filter.category, suggestion
            ),
            None => eprintln!("No category named '{}'.", filter.category),
        }
    }

    Ok(view)
}

/// Interactive browse loop.
fn cmd_browse(path: &Path) -> Result<()> {
    let mut view = MenuCatalogView::new(open_catalog(path)?);

    if view.is_empty() {
        println!("The menu is empty.");
        return Ok(());
    }

    println!("Loaded {} menu items", view.len());

    loop {
        display_view(&view);

        let state = view.state().clone();
        let event = match prompt_action()? {
            BrowseAction::Category => Some(ViewEvent::SelectCategory(prompt_category(
                view.categories(),
                &state.selected_category,
            )?)),
            BrowseAction::Search => Some(ViewEvent::Search(prompt_search(&state.search_query)?)),
            BrowseAction::Toggle => {
                prompt_toggle(&view.visible_items(), state.expanded_id.as_deref())?
                    .map(ViewEvent::Toggle)
            }
            BrowseAction::Quit => break,
        };

        if let Some(event) = event {
            view.dispatch(event);
        }
    }

    Ok(())
}

/// Print the category filter choices.
fn cmd_categories(path: &Path) -> Result<()> {
    let view = MenuCatalogView::new(open_catalog(path)?);
    display_categories(view.categories(), &view.state().selected_category);
    Ok(())
}

/// Print items matching the filters.
fn cmd_list(path: &Path, filter: &FilterArgs) -> Result<()> {
    let view = filtered_view(path, filter)?;
    display_view(&view);
    Ok(())
}

/// Print one item expanded.
fn cmd_show(path: &Path, id: &str) -> Result<()> {
    let view = MenuCatalogView::new(open_catalog(path)?);
    let item = view
        .find_item(id)
        .ok_or_else(|| MenuError::ItemNotFound(id.to_string()))?;

    display_item_detail(item);
    Ok(())
}

/// Write items matching the filters to CSV.
fn cmd_export(path: &Path, out: &Path, filter: &FilterArgs) -> Result<()> {
    let view = filtered_view(path, filter)?;
    let items = view.visible_items();

    export_csv(out, &items)?;
    println!("Exported {} items to {}", items.len(), out.display());
    Ok(())
}

/// Seed the catalog file with the sample menu.
fn cmd_sample(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(MenuError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let items = sample_catalog();
    save_catalog(path, &items)?;
    println!("Wrote {} sample items to {}", items.len(), path.display());
    Ok(())
}
