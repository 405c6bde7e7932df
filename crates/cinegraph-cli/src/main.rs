//! Cinegraph CLI - Command-line interface for Cinegraph
//!
//! This is the main entry point for exploring a MovieLens-style dataset as
//! a graph. It loads the CSV files, builds the movie graph under a chosen
//! adjacency rule, and answers statistics, path, and similarity queries.

use clap::{Parser, Subcommand, ValueEnum};
use cinegraph_graph::{AdjacencyRule, DEFAULT_MIN_SHARED_REVIEWERS};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(author = "Cinegraph Contributors")]
#[command(version)]
#[command(about = "Movie graph analysis over MovieLens-style ratings", long_about = None)]
struct Cli {
    /// Movies CSV (movieId,title,genres)
    #[arg(long, global = true, default_value = "movies.csv")]
    movies: PathBuf,

    /// Ratings CSV (userId,movieId,rating,timestamp)
    #[arg(long, global = true, default_value = "ratings.csv")]
    ratings: PathBuf,

    /// Adjacency rule deciding which movie pairs become edges
    #[arg(long, global = true, value_enum, default_value = "shared-rating")]
    rule: Rule,

    /// Reviewers two movies must share before the rating rules connect them
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_SHARED_REVIEWERS)]
    min_shared: usize,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Command-line face of [`AdjacencyRule`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rule {
    SharedRating,
    CoRated,
    SharedGenre,
    Dissimilarity,
}

impl From<Rule> for AdjacencyRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::SharedRating => AdjacencyRule::SharedRating,
            Rule::CoRated => AdjacencyRule::CoRated,
            Rule::SharedGenre => AdjacencyRule::SharedGenre,
            Rule::Dissimilarity => AdjacencyRule::Dissimilarity,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show graph-wide statistics
    Stats {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show one movie and its graph neighbors
    Movie {
        /// Movie id (1-based, as assigned at load)
        id: u32,
    },

    /// Find the shortest path between two movies
    Path {
        /// Movie id to start from
        from: u32,

        /// Movie id to reach
        to: u32,
    },

    /// Rank movies by similarity to one movie
    Similar {
        /// Movie id to rank against
        id: u32,

        /// Maximum results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Export the graph to JSON for visualization
    Export {
        /// Output file
        #[arg(short, long, default_value = "cinegraph.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let options = commands::GraphOptions {
        movies: cli.movies,
        ratings: cli.ratings,
        rule: cli.rule.into(),
        min_shared: cli.min_shared,
    };

    let result = match cli.command {
        Commands::Stats { json } => commands::stats(&options, json),
        Commands::Movie { id } => commands::movie(&options, id),
        Commands::Path { from, to } => commands::path(&options, from, to),
        Commands::Similar { id, limit } => commands::similar(&options, id, limit),
        Commands::Export { output } => commands::export(&options, &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
