use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::SalesDataset;
use pipeline::{evaluate, DashboardSnapshot, FilterSelection};
use std::path::PathBuf;

mod render;

/// sales-dash - Mini sales dashboard
#[derive(Parser)]
#[command(name = "sales-dash")]
#[command(about = "Filter sales records by rep and region and summarize them", long_about = None)]
struct Cli {
    /// CSV file with region, sales and rep columns (defaults to the built-in sample)
    #[arg(short, long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the dataset and show the table, chart and metrics
    Show {
        /// Rep to filter for (exact, case-sensitive match; surrounding spaces are
        /// not trimmed, unlike --region values; omit for all reps)
        #[arg(long)]
        rep: Option<String>,

        /// Regions to include, repeatable or comma separated (default: all regions)
        #[arg(long = "region", value_delimiter = ',', conflicts_with = "no_regions")]
        regions: Vec<String>,

        /// Select no regions at all
        #[arg(long)]
        no_regions: bool,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Width of the longest chart bar
        #[arg(long, default_value = "40")]
        chart_width: usize,
    },

    /// List the valid reps and region choices
    Options,
}

fn main() -> Result<()> {
    // Initialize tracing (stderr keeps stdout clean for --json)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = match &cli.data_file {
        Some(path) => SalesDataset::load_from_file(path)
            .with_context(|| format!("Failed to load sales dataset from {}", path.display()))?,
        None => {
            tracing::info!("No data file given, using the built-in sample dataset");
            SalesDataset::sample()
        }
    };

    match cli.command {
        Commands::Show {
            rep,
            regions,
            no_regions,
            json,
            chart_width,
        } => {
            let selection = build_selection(&dataset, rep, regions, no_regions);
            handle_show(&dataset, &selection, json, chart_width)?
        }
        Commands::Options => handle_options(&dataset),
    }

    Ok(())
}

/// Turn command-line flags into a FilterSelection
///
/// No `--region` means every region, like the dashboard's initial state.
fn build_selection(
    dataset: &SalesDataset,
    rep: Option<String>,
    regions: Vec<String>,
    no_regions: bool,
) -> FilterSelection {
    let rep = rep.unwrap_or_default();
    if no_regions {
        FilterSelection::new(rep, Vec::<String>::new())
    } else if regions.is_empty() {
        FilterSelection {
            rep_filter: rep,
            ..FilterSelection::defaults(dataset.known_values())
        }
    } else {
        FilterSelection::new(rep, regions.iter().map(|r| r.trim().to_string()))
    }
}

/// Handle the 'show' command
fn handle_show(
    dataset: &SalesDataset,
    selection: &FilterSelection,
    json: bool,
    chart_width: usize,
) -> Result<()> {
    // An invalid rep ends the command here, before anything is printed
    let snapshot = evaluate(dataset, selection)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?
        );
    } else {
        print_dashboard(&snapshot, chart_width);
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dataset: &SalesDataset) {
    let known = dataset.known_values();

    println!("{}", "Reps:".bold().blue());
    for rep in known.reps() {
        println!("{}{}", "• ".green(), rep);
    }
    println!("{}", "Regions:".bold().blue());
    for region in known.sorted_regions() {
        println!("{}{}", "• ".green(), region);
    }
}

fn print_dashboard(snapshot: &DashboardSnapshot, chart_width: usize) {
    println!("{}", "Mini sales dashboard".bold().blue());

    println!("\n{}", "Table".bold());
    for line in render::render_table(&snapshot.view) {
        println!("{}", line);
    }

    println!("\n{}", "Sales by region".bold());
    for line in render::render_chart(&snapshot.chart, chart_width) {
        println!("{}", line.cyan());
    }

    println!("\n{}", "Filter metrics".bold());
    for line in render::render_metrics(&snapshot.metrics) {
        println!("{}{}", "• ".green(), line);
    }
}
