use anyhow::{anyhow, Result};
use app_state::PlaceListState;
use clap::{Parser, Subcommand};
use colored::Colorize;
use place_data::{CategoryId, Place, PlaceId, PlaceIndex};
use std::path::PathBuf;

/// Andong Places - browse the location-discovery dataset
#[derive(Parser)]
#[command(name = "andong-places")]
#[command(about = "Inspect and search the Andong places dataset", long_about = None)]
struct Cli {
    /// Path to the dataset directory (places.json + categories.json)
    #[arg(short, long, default_value = "data/andong")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search places by free text and/or category
    Search {
        /// Free-text query, matched against name/address/description/cuisine
        #[arg(long, default_value = "")]
        query: String,

        /// Restrict to a category id (e.g. "food")
        #[arg(long)]
        category: Option<CategoryId>,
    },

    /// List all active places
    List {
        /// Restrict to a category id
        #[arg(long)]
        category: Option<CategoryId>,
    },

    /// List categories with their active place counts
    Categories,

    /// Show a single place in full detail
    Show {
        /// Place id to display
        #[arg(long)]
        id: PlaceId,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let index = PlaceIndex::load_from_dir(&cli.data_dir)?;
    let (places, categories) = index.counts();
    println!(
        "{} Loaded {} places, {} categories from {}",
        "✓".green(),
        places,
        categories,
        cli.data_dir.display()
    );

    match cli.command {
        Commands::Search { query, category } => handle_search(&index, query, category),
        Commands::List { category } => handle_list(&index, category),
        Commands::Categories => handle_categories(&index),
        Commands::Show { id } => handle_show(&index, &id),
    }
}

/// Handle the 'search' command.
///
/// Drives a PlaceListState the way the application shell does: set the
/// criteria and read the re-derived view, rather than calling the engine
/// directly.
fn handle_search(index: &PlaceIndex, query: String, category: Option<CategoryId>) -> Result<()> {
    let mut state = PlaceListState::new(index.all_places().cloned().collect());
    state.set_search_query(&query);
    state.select_category(category.clone());

    let results = state.filtered();
    let heading = match &category {
        Some(c) => format!("Search results for '{}' in category '{}':", query, c),
        None => format!("Search results for '{}':", query),
    };
    println!("{}", heading.bold().blue());

    if results.is_empty() {
        println!("  (no matching places)");
        return Ok(());
    }
    for place in &results {
        print_place_line(index, place);
    }
    println!("{} place(s)", results.len());
    Ok(())
}

/// Handle the 'list' command
fn handle_list(index: &PlaceIndex, category: Option<CategoryId>) -> Result<()> {
    if let Some(category_id) = &category {
        // Fail loudly on an unknown category instead of printing nothing
        index
            .get_category(category_id)
            .ok_or_else(|| anyhow!("Unknown category: {}", category_id))?;
    }

    let visible: Vec<&Place> = index
        .all_places()
        .filter(|p| p.is_active)
        .filter(|p| category.as_ref().is_none_or(|c| &p.category_id == c))
        .collect();

    println!("{}", "Active places:".bold().blue());
    for place in &visible {
        print_place_line(index, place);
    }
    println!("{} place(s)", visible.len());
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(index: &PlaceIndex) -> Result<()> {
    println!("{}", "Categories:".bold().blue());
    for category in index.categories_sorted() {
        let active = index
            .places_in_category(&category.id)
            .iter()
            .filter(|id| index.get_place(id.as_str()).map(|p| p.is_active).unwrap_or(false))
            .count();
        let icon = category.icon.as_deref().unwrap_or("•");
        println!(
            "{} {} ({}): {} active place(s)",
            icon,
            category.name.bold(),
            category.id.cyan(),
            active
        );
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(index: &PlaceIndex, id: &str) -> Result<()> {
    let place = index
        .get_place(id)
        .ok_or_else(|| anyhow!("Place {} not found", id))?;

    println!("{}", place.name.bold().blue());
    println!("{}Address: {}", "• ".green(), place.address);
    if let Some(description) = &place.description {
        println!("{}Description: {}", "• ".green(), description);
    }
    if let Some(cuisine) = &place.cuisine {
        println!("{}Cuisine: {}", "• ".green(), cuisine);
    }
    let category_name = index
        .get_category(&place.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(place.category_id.as_str());
    println!("{}Category: {}", "• ".cyan(), category_name);
    println!(
        "{}Location: {:.4}, {:.4}",
        "• ".cyan(),
        place.latitude,
        place.longitude
    );
    if !place.is_active {
        println!("{}", "(inactive - hidden from search)".red());
    }
    Ok(())
}

/// One-line summary used by search/list output
fn print_place_line(index: &PlaceIndex, place: &Place) {
    let category = index
        .get_category(&place.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or(place.category_id.as_str());
    println!(
        "  {} [{}] - {}",
        place.name.bold(),
        category.cyan(),
        place.address
    );
}
