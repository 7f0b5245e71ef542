use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use recipe_store::cmd;
use recipe_store::model::RecipeId;
use std::path::PathBuf;
use std::process;

/// In-memory recipe collection with search, favorites and recommendations
///
/// recipe-store loads a JSON recipe catalog, replays the favorites you pass
/// and prints the filtered list, your favorites or what to cook next.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct FavoriteArgs {
    /// Recipe id to mark as favorite (repeatable, applied in order)
    #[arg(short, long = "favorite", value_name = "ID")]
    favorites: Vec<RecipeId>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter recipes
    List {
        /// Recipe catalog (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Case-insensitive text to find in titles, descriptions, ingredients or tags
        #[arg(short, long)]
        search: Option<String>,

        /// Preparation time: quick, medium, long
        #[arg(short, long)]
        time: Option<String>,

        /// Difficulty: easy, medium, hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest recipes based on favorites
    Recommend {
        /// Recipe catalog (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        favorites: FavoriteArgs,

        /// Seed for the random tie-break (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show favorites and learned preferences
    Favorites {
        /// Recipe catalog (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        favorites: FavoriteArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show collection statistics
    Stats {
        /// Recipe catalog (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        favorites: FavoriteArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recipe in full
    Show {
        /// Recipe catalog (JSON array)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Recipe id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default .recipe-store.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var(recipe_store::fmt::NO_EMOJI_VAR, "1");
    }

    let result = match cli.command {
        Some(Commands::List {
            file,
            search,
            time,
            difficulty,
            category,
            json,
        }) => {
            let options = cmd::ListOptions {
                search,
                time,
                difficulty,
                category,
            };
            cmd::cmd_list(&file, &options, json)
        }
        Some(Commands::Recommend {
            file,
            favorites,
            seed,
            json,
        }) => cmd::cmd_recommend(&file, &favorites.favorites, seed, json),
        Some(Commands::Favorites {
            file,
            favorites,
            json,
        }) => cmd::cmd_favorites(&file, &favorites.favorites, json),
        Some(Commands::Stats {
            file,
            favorites,
            json,
        }) => cmd::cmd_stats(&file, &favorites.favorites, json),
        Some(Commands::Show { file, id, json }) => cmd::cmd_show(&file, &id, json),
        Some(Commands::Init { force }) => cmd::cmd_init(force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = result {
        use recipe_store::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
