use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::ALL_CATEGORIES;

/// MenuBrowser — browse a restaurant menu by category and search, with calorie breakdowns.
#[derive(Parser, Debug)]
#[command(name = "menu_browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu catalog JSON file.
    #[arg(short, long, default_value = "menu.json")]
    pub file: PathBuf,
}

/// Category and search filters shared by listing commands.
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// Only show items in this category ("Uncategorized" for items without one).
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Case-insensitive search over names, descriptions, and ingredients.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the menu interactively.
    Browse,

    /// List the category filter choices.
    Categories,

    /// List menu items matching the filters.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one item with its ingredient breakdown.
    Show {
        /// Item id.
        id: String,
    },

    /// Export menu items matching the filters as CSV.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "menu.csv")]
        out: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write the built-in sample menu to the catalog file.
    Sample {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Browse
    }
}
