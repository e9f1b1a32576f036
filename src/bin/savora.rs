// ABOUTME: Command-line front end for the recipe browsing core
// ABOUTME: Clap subcommands driving RecipeApp one-shot with a console renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

//! Usage:
//! ```bash
//! # A page of random recipes
//! savora random
//!
//! # Full search
//! savora search "chicken piccata"
//!
//! # Title suggestions for a partial query
//! savora suggest chick
//!
//! # Detail with nutrition
//! savora detail 716429
//!
//! # Favorites
//! savora favorites list
//! savora favorites toggle 716429
//! ```
//!
//! Requires `CATALOG_API_KEY` in the environment.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use savora::catalog::http_client::initialize_shared_client;
use savora::errors::AppResult;
use savora::favorites::{FavoritesStore, FileBackend};
use savora::models::{RecipeDetail, Suggestion};
use savora::render::{RecipeCard, Renderer};
use savora::view::ListViewKind;
use savora::{AppConfig, CatalogProvider, RecipeApp, SpoonacularClient};

#[derive(Parser)]
#[command(
    name = "savora",
    about = "Browse a recipe catalog from the terminal",
    long_about = "Search recipes, view detail and nutrition, and keep a locally persisted favorites list."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show a page of random recipes
    Random,

    /// Search recipes for a query
    Search {
        /// Query text
        query: String,
    },

    /// Show title suggestions for a partial query
    Suggest {
        /// Partial query text
        query: String,
    },

    /// Show full detail and nutrition for one recipe
    Detail {
        /// Recipe id
        id: u64,
    },

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// Fetch and list the favorited recipes
    List,

    /// Toggle a recipe's favorite state
    Toggle {
        /// Recipe id
        id: u64,
    },
}

/// Line-oriented renderer for one-shot commands
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render_list(&self, cards: &[RecipeCard]) {
        for card in cards {
            let marker = if card.favorite { "*" } else { " " };
            println!(
                "{marker} {:>8}  {}  ({} min, {} servings)",
                card.recipe.id,
                card.recipe.title,
                card.recipe.ready_in_minutes,
                card.recipe.servings
            );
        }
    }

    fn render_suggestions(&self, suggestions: &[Suggestion]) {
        for suggestion in suggestions {
            println!("{:>8}  {}", suggestion.id, suggestion.title);
        }
    }

    fn render_detail(&self, detail: &RecipeDetail) {
        println!("{}", detail.summary.title);
        println!(
            "{} min, {} servings",
            detail.summary.ready_in_minutes, detail.summary.servings
        );
        println!(
            "calories: {}, fat: {}, protein: {}",
            detail.nutrition.calories, detail.nutrition.fat, detail.nutrition.protein
        );
        println!("\nIngredients:");
        for ingredient in &detail.ingredients {
            println!("  - {ingredient}");
        }
        println!("\nInstructions:");
        for (index, step) in detail.instruction_steps.iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }

    fn close_detail(&self) {}

    fn show_loading(&self) {}

    fn hide_loading(&self) {}

    fn set_active_nav(&self, _view: ListViewKind) {}

    fn set_favorite_indicator(&self, id: u64, active: bool) {
        if active {
            println!("recipe {id} added to favorites");
        } else {
            println!("recipe {id} removed from favorites");
        }
    }

    fn show_empty_favorites_message(&self) {
        println!("No favorite recipes yet!");
    }

    fn show_error_message(&self, text: &str) {
        eprintln!("error: {text}");
    }

    fn show_notice(&self, text: &str) {
        eprintln!("notice: {text}");
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    savora::logging::init(if cli.verbose { "debug" } else { "warn" });

    let config = AppConfig::from_env()?;
    initialize_shared_client(
        config.catalog.timeout_secs,
        config.catalog.connect_timeout_secs,
    );

    let catalog: Arc<dyn CatalogProvider> = Arc::new(SpoonacularClient::new(config.catalog));
    let favorites = FavoritesStore::open(Box::new(FileBackend::new(
        config.storage.favorites_path.clone(),
    )));
    let app = RecipeApp::new(
        Arc::clone(&catalog),
        Arc::new(ConsoleRenderer),
        favorites,
        config.search.clone(),
    );

    match cli.command {
        Command::Random => app.go_home().await,
        Command::Search { query } => app.submit_search(&query).await,
        Command::Suggest { query } => {
            // One-shot invocation: the debounce window is pointless
            // here, query the catalog directly
            let suggestions = catalog
                .autocomplete(&query, config.search.suggestion_limit)
                .await?;
            ConsoleRenderer.render_suggestions(&suggestions);
        }
        Command::Detail { id } => app.open_detail(id).await,
        Command::Favorites { action } => match action {
            FavoritesCommand::List => app.go_favorites().await,
            FavoritesCommand::Toggle { id } => app.toggle_favorite(id).await,
        },
    }

    Ok(())
}
