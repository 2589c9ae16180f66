//! Mealdex CLI — recipe search and favorites from the terminal

use clap::{Parser, Subcommand};

use mealdex::data::{
    FavoriteRecipe, FavoritesSnapshot, FavoritesStore, FileBackend, RecipeDetail,
};
use mealdex::providers::{MealDbSource, RecipeSource};

#[derive(Parser)]
#[command(name = "mealdex", about = "Recipe search and favorites", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes by name
    Search {
        /// Name or partial name to search for
        query: String,
    },
    /// Show the full recipe for an id
    Show {
        /// Recipe id
        id: String,
    },
    /// Show one random recipe
    Random,
    /// Manage saved favorites
    #[command(subcommand)]
    Fav(FavCommand),
}

#[derive(Subcommand)]
enum FavCommand {
    /// List saved favorites
    List,
    /// Save a recipe by id
    Add {
        /// Recipe id
        id: String,
    },
    /// Remove a saved recipe by id
    Remove {
        /// Recipe id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let backend = match FileBackend::open_default() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let store = FavoritesStore::new(backend);
    let source = MealDbSource::new()?;

    match cli.command {
        Command::Search { query } => {
            // A failing source degrades to an empty result set
            let results = match source.search(&query).await {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{e}");
                    Vec::new()
                }
            };

            if results.is_empty() {
                println!("No recipes found.");
            } else {
                for recipe in results {
                    println!("{:<8} {}", recipe.id, recipe.name);
                }
            }
        }

        Command::Show { id } => match source.lookup(&id).await {
            Ok(Some(detail)) => {
                let saved = store.contains(&detail.id).await?;
                print_detail(&detail, saved);
            }
            Ok(None) => println!("Recipe not found."),
            Err(e) => eprintln!("{e}"),
        },

        Command::Random => match source.random().await {
            Ok(Some(detail)) => {
                let saved = store.contains(&detail.id).await?;
                print_detail(&detail, saved);
            }
            Ok(None) => println!("Recipe not found."),
            Err(e) => eprintln!("{e}"),
        },

        Command::Fav(fav) => match fav {
            FavCommand::List => {
                let mut snapshot = FavoritesSnapshot::new();
                snapshot.focus(&store).await?;

                if snapshot.recipes().is_empty() {
                    println!("No favorites yet.");
                } else {
                    for recipe in snapshot.recipes() {
                        println!("{:<8} {}", recipe.id, recipe.name);
                    }
                }
            }
            FavCommand::Add { id } => match source.lookup(&id).await {
                Ok(Some(detail)) => {
                    store.add(FavoriteRecipe::from(&detail)).await?;
                    println!("Saved {}.", detail.name);
                }
                Ok(None) => println!("Recipe not found."),
                Err(e) => eprintln!("{e}"),
            },
            FavCommand::Remove { id } => {
                store.remove(&id).await?;
                println!("Removed.");
            }
        },
    }

    Ok(())
}

fn print_detail(detail: &RecipeDetail, saved: bool) {
    if saved {
        println!("{}  [saved]", detail.name);
    } else {
        println!("{}", detail.name);
    }
    if let Some(category) = &detail.category {
        println!("Category: {category}");
    }
    if let Some(area) = &detail.area {
        println!("Cuisine: {area}");
    }

    if !detail.ingredients.is_empty() {
        println!("\nIngredients:");
        for entry in &detail.ingredients {
            if entry.measure.is_empty() {
                println!("  - {}", entry.ingredient);
            } else {
                println!("  - {} {}", entry.measure, entry.ingredient);
            }
        }
    }

    if !detail.instructions.is_empty() {
        println!("\nInstructions:\n{}", detail.instructions);
    }
}
