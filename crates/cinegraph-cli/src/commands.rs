//! CLI command implementations.

use cinegraph_core::{load_dataset, DataSet};
use cinegraph_graph::{
    dijkstra, rank_by_similarity, summarize, AdjacencyRule, Graph, MovieGraphBuilder, VertexId,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Dataset and graph selection shared by every subcommand.
pub struct GraphOptions {
    pub movies: PathBuf,
    pub ratings: PathBuf,
    pub rule: AdjacencyRule,
    pub min_shared: usize,
}

/// Loads the dataset and builds the graph under the chosen rule.
fn load(options: &GraphOptions) -> Result<(DataSet, Box<dyn Graph>)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Loading dataset...");

    let dataset = load_dataset(&options.movies, &options.ratings)?;

    spinner.set_message(format!("Building {} graph...", options.rule));
    let graph = MovieGraphBuilder::new(&dataset)
        .min_shared_reviewers(options.min_shared)
        .build(options.rule)?;

    spinner.finish_and_clear();
    debug!(
        rule = %options.rule,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok((dataset, graph))
}

/// Title of the movie behind `vertex`, falling back to the raw id.
fn title(dataset: &DataSet, vertex: VertexId) -> String {
    dataset
        .movie(vertex as u32 + 1)
        .map_or_else(|| format!("#{}", vertex + 1), |movie| movie.title.clone())
}

/// Resolves a command-line movie id to its vertex, rejecting ids the
/// dataset does not know.
fn vertex_for(dataset: &DataSet, id: u32) -> Result<VertexId> {
    if dataset.movie(id).is_none() {
        return Err(format!(
            "no movie with id {} (the dataset has {})",
            id,
            dataset.movie_count()
        )
        .into());
    }
    Ok((id - 1) as usize)
}

/// Show graph-wide statistics.
pub fn stats(options: &GraphOptions, json_output: bool) -> Result<()> {
    let (dataset, graph) = load(options)?;
    let summary = summarize(graph.as_ref())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Cinegraph Statistics".cyan().bold());
    println!();
    println!("  {} {}", "Rule:".dimmed(), options.rule);
    println!("  {} {}", "Movies:".dimmed(), summary.vertices);
    println!("  {} {}", "Reviewers:".dimmed(), dataset.reviewer_count());
    println!("  {} {}", "Edges:".dimmed(), summary.edges);
    println!("  {} {:.4}", "Density:".dimmed(), summary.density);
    println!("  {} {}", "Max degree:".dimmed(), summary.max_degree);
    match summary.diameter.endpoints {
        Some((start, end)) => println!(
            "  {} {} ({} to {})",
            "Diameter:".dimmed(),
            summary.diameter.length,
            title(&dataset, start).cyan(),
            title(&dataset, end).cyan()
        ),
        None => println!("  {} (empty graph)", "Diameter:".dimmed()),
    }
    println!(
        "  {} {:.4}",
        "Mean path length:".dimmed(),
        summary.mean_path_length
    );

    Ok(())
}

/// Show one movie and its graph neighbors.
pub fn movie(options: &GraphOptions, id: u32) -> Result<()> {
    let (dataset, graph) = load(options)?;
    let vertex = vertex_for(&dataset, id)?;
    let movie = dataset.movie(id).ok_or("movie lookup failed")?;

    println!("{}", movie.to_string().cyan().bold());
    let mut genres: Vec<_> = movie.genres.iter().cloned().collect();
    genres.sort();
    println!("  {} {}", "Genres:".dimmed(), genres.join(", "));
    println!("  {} {}", "Ratings:".dimmed(), movie.rating_count());

    let mut neighbors = graph.neighbors(vertex)?;
    neighbors.sort_unstable();
    println!(
        "  {} {} under the {} rule",
        "Neighbors:".dimmed(),
        neighbors.len(),
        options.rule
    );
    for &neighbor in neighbors.iter().take(10) {
        println!("    {}", title(&dataset, neighbor));
    }
    if neighbors.len() > 10 {
        println!("    ... and {} more", neighbors.len() - 10);
    }

    Ok(())
}

/// Find and print the shortest path between two movies.
pub fn path(options: &GraphOptions, from: u32, to: u32) -> Result<()> {
    let (dataset, graph) = load(options)?;
    let source = vertex_for(&dataset, from)?;
    let target = vertex_for(&dataset, to)?;

    let tree = dijkstra(graph.as_ref(), source)?;
    if !tree.is_reachable(target) {
        println!(
            "No path from {} to {} under the {} rule",
            title(&dataset, source).yellow(),
            title(&dataset, target).yellow(),
            options.rule
        );
        return Ok(());
    }

    let path = tree.path_to(target)?;
    let chain: Vec<String> = path.iter().map(|&v| title(&dataset, v)).collect();
    println!("{}", chain.join(" ==> "));
    println!(
        "  {} {} over {} edges",
        "Distance:".dimmed(),
        tree.distance(target),
        path.len() - 1
    );

    Ok(())
}

/// Rank movies by similarity to one movie.
pub fn similar(options: &GraphOptions, id: u32, limit: usize) -> Result<()> {
    let (dataset, graph) = load(options)?;
    let vertex = vertex_for(&dataset, id)?;

    let ranking = rank_by_similarity(graph.as_ref(), vertex)?;

    println!(
        "{} {}",
        "Closest to".cyan().bold(),
        title(&dataset, vertex).cyan().bold()
    );
    println!();

    let mut shown = 0;
    for (other, distance) in ranking {
        if other == vertex {
            continue;
        }
        if shown == limit {
            break;
        }
        if distance.is_finite() {
            println!("  {:>10.2}  {}", distance, title(&dataset, other));
        } else {
            println!("  {:>10}  {}", "---", title(&dataset, other));
        }
        shown += 1;
    }

    if shown == 0 {
        println!("  (no other movies in the graph)");
    }

    Ok(())
}

/// Export the graph to JSON for visualization.
pub fn export(options: &GraphOptions, output: &Path) -> Result<()> {
    let (dataset, graph) = load(options)?;
    let n = graph.vertex_count();

    let nodes: Vec<_> = dataset
        .movies()
        .iter()
        .map(|movie| {
            let mut genres: Vec<_> = movie.genres.iter().cloned().collect();
            genres.sort();
            serde_json::json!({ "name": movie.title, "genres": genres })
        })
        .collect();

    // Every rule produces symmetric adjacency, so an i < j scan emits
    // each unordered pair exactly once.
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if graph.edge_exists(i, j)? {
                edges.push(serde_json::json!({ "source": i, "target": j }));
            }
        }
    }

    let node_count = nodes.len();
    let edge_count = edges.len();
    let export = serde_json::json!({ "nodes": nodes, "edges": edges });
    fs::write(output, serde_json::to_string_pretty(&export)?)?;

    println!(
        "{} Exported {} nodes and {} edges to {}",
        "✓".green(),
        node_count.to_string().cyan(),
        edge_count.to_string().cyan(),
        output.display()
    );

    Ok(())
}
