// ABOUTME: Recipe Finder CLI - search recipes, manage favorites and the shopping list
// ABOUTME: Parses commands, loads configuration, and drives a RecipeSession
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search quick vegan recipes, quickest first
//! recipe-finder search --diet vegan --max-time 30 --sort cookTime
//!
//! # List the accepted filter values
//! recipe-finder options
//!
//! # Show a recipe with its ingredients and steps
//! recipe-finder show spaghetti-carbonara
//!
//! # Toggle a favorite and list favorites
//! recipe-finder favorites toggle thai-green-curry
//! recipe-finder favorites list
//!
//! # Build a shopping list
//! recipe-finder shopping add-recipe classic-hummus
//! recipe-finder shopping add "sparkling water"
//! recipe-finder shopping complete 0 2
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use recipe_finder::config::AppConfig;
use recipe_finder::logging::LoggingConfig;
use recipe_finder::query::{DifficultyFilter, SortBy};
use recipe_finder::session::RecipeSession;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-finder",
    version,
    about = "Recipe search, favorites and shopping list",
    long_about = "Search the recipe collection by text, category, diet, cook time and difficulty, \
                  keep a list of favorites, and build a shopping list from recipe ingredients."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding favorites and the shopping list
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    memory: bool,

    /// Use an external fixture file instead of the built-in recipes
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search and filter recipes
    Search {
        /// Text matched against title, cuisine and ingredient names
        query: Option<String>,

        /// Category identifier (see `categories`)
        #[arg(long, default_value = "all")]
        category: String,

        /// Required dietary tag, repeatable
        #[arg(long = "diet")]
        diet: Vec<String>,

        /// Maximum cook time in minutes, or "all"
        #[arg(long, default_value = "all")]
        max_time: String,

        /// Required difficulty: easy, medium, hard or all
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,

        /// Sort order: popularity, rating or cookTime
        #[arg(long, default_value = "popularity")]
        sort: SortBy,
    },

    /// Show a recipe in detail
    Show {
        /// Recipe identifier
        id: String,
    },

    /// List categories with recipe counts
    Categories,

    /// List diets, cook times, difficulties and sort orders accepted by `search`
    Options,

    /// Favorite recipes
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorite recipes
    List,

    /// Add or remove a favorite
    Toggle {
        /// Recipe identifier
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ShoppingCommand {
    /// Show the shopping list
    List,

    /// Add a free-text item
    Add {
        /// Item text
        text: String,
    },

    /// Add every ingredient of a recipe, skipping entries already listed
    AddRecipe {
        /// Recipe identifier
        id: String,
    },

    /// Remove the item at a position
    Remove {
        /// Zero-based position
        index: usize,
    },

    /// Mark items as done and clear them from the list
    Complete {
        /// Zero-based positions
        #[arg(required = true)]
        indices: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbosity(cli.verbose).init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if cli.memory {
        config = config.with_memory_storage();
    }
    if let Some(path) = cli.fixture {
        config = config.with_fixture(path);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let fixture = config.load_fixture()?;
    let mut session = RecipeSession::open(fixture, config.open_store());

    match cli.command {
        Command::Search {
            query,
            category,
            diet,
            max_time,
            difficulty,
            sort,
        } => {
            let args = commands::browse::SearchArgs {
                query: query.unwrap_or_default(),
                category,
                diet,
                max_time,
                difficulty,
                sort,
            };
            commands::browse::search(&mut session, args);
        }
        Command::Show { id } => commands::browse::show(&mut session, &id)?,
        Command::Categories => commands::browse::categories(&session),
        Command::Options => commands::browse::options(),
        Command::Favorites { action } => match action {
            FavoritesCommand::List => commands::favorites::list(&session),
            FavoritesCommand::Toggle { id } => commands::favorites::toggle(&mut session, &id),
        },
        Command::Shopping { action } => match action {
            ShoppingCommand::List => commands::shopping::list(&session),
            ShoppingCommand::Add { text } => commands::shopping::add(&mut session, &text),
            ShoppingCommand::AddRecipe { id } => {
                commands::shopping::add_recipe(&mut session, &id)?;
            }
            ShoppingCommand::Remove { index } => commands::shopping::remove(&mut session, index)?,
            ShoppingCommand::Complete { indices } => {
                commands::shopping::complete(&mut session, &indices)?;
            }
        },
    }

    helpers::display::warn_if_not_persistent(&session);
    Ok(())
}
