//! AUGMENT command-line runner
//!
//! Runs the random and worst-case Ford-Fulkerson timing sweeps, writes raw
//! timings and per-size summaries as CSV, or solves a single network read
//! from an edge-list file.

mod edge_list;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use augment_core::experiments::{
    format_summary_table, run_random_experiments, run_worst_case_experiments, summarize,
    write_records_csv, write_summary_csv, ExperimentConfig, TimingRecord,
};
use augment_core::{check_flow, min_cut, Algorithm, FordFulkerson};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(name = "augment")]
#[command(about = "Ford-Fulkerson maximum flow experiments")]
struct Args {
    /// JSON experiment configuration; unspecified fields keep their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base seed for instance generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output directory for CSV files
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Check flow invariants after every run
    #[arg(long, global = true)]
    verify: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Time max flow on random networks
    Random,
    /// Time max flow on linear chain networks
    WorstCase,
    /// Run both sweeps
    All,
    /// Solve one network given as a `from to capacity` edge list
    ///
    /// The search recurses once per vertex on a path, so networks whose
    /// augmenting paths run to roughly 10^5 vertices or more can exhaust the
    /// main thread's stack.
    Solve {
        /// Edge list file
        #[arg(short, long)]
        edges: PathBuf,

        #[arg(long, default_value = "S")]
        source: String,

        #[arg(long, default_value = "T")]
        sink: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;

    match &args.command {
        Command::Random => run_random(&config),
        Command::WorstCase => run_worst_case(&config),
        Command::All => {
            config.validate().context("Invalid experiment configuration")?;
            run_random(&config)?;
            run_worst_case(&config)
        }
        Command::Solve {
            edges,
            source,
            sink,
        } => solve(edges, source, sink, config.verify),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(args: &Args) -> Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExperimentConfig::default(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    config.verify |= args.verify;
    Ok(config)
}

fn run_random(config: &ExperimentConfig) -> Result<()> {
    let records = run_random_experiments(config).context("Random experiment failed")?;
    persist(config, "random", "Random networks", &records)
}

fn run_worst_case(config: &ExperimentConfig) -> Result<()> {
    let records = run_worst_case_experiments(config).context("Worst-case experiment failed")?;
    persist(config, "worst_case", "Worst-case chains", &records)
}

fn persist(
    config: &ExperimentConfig,
    prefix: &str,
    title: &str,
    records: &[TimingRecord],
) -> Result<()> {
    let dir = &config.output_dir;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let results_path = dir.join(format!("{}_results.csv", prefix));
    write_records_csv(&results_path, records)
        .with_context(|| format!("Failed to write {}", results_path.display()))?;

    let rows = summarize(records);
    let summary_path = dir.join(format!("{}_summary.csv", prefix));
    write_summary_csv(&summary_path, &rows)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    println!("{}", format_summary_table(title, &rows));
    info!(
        "{} records written to {}",
        records.len(),
        results_path.display()
    );
    Ok(())
}

fn solve(edges: &Path, source: &str, sink: &str, verify: bool) -> Result<()> {
    let text = fs::read_to_string(edges)
        .with_context(|| format!("Failed to read {}", edges.display()))?;
    let mut network = edge_list::parse_edge_list(&text)
        .with_context(|| format!("Failed to parse {}", edges.display()))?;

    let mut solver = FordFulkerson::new();
    let result = solver.solve(&mut network, source, sink);
    info!(
        "{} finished after {} augmentations, {} vertices explored",
        solver.name(),
        result.metrics.augmentations,
        result.metrics.vertices_explored
    );

    if verify {
        check_flow(&network, source, sink, result.max_flow)
            .into_result()
            .context("Flow check failed")?;
    }

    println!("max flow {} -> {}: {}", source, sink, result.max_flow);
    for (_, edge) in network.edges() {
        println!(
            "  {} -> {}: {}/{}",
            network.label(edge.from()),
            network.label(edge.to()),
            edge.flow(),
            edge.capacity()
        );
    }

    let cut = min_cut(&network, source);
    println!(
        "min cut capacity {} across {} edges",
        cut.capacity,
        cut.cut_edges.len()
    );
    Ok(())
}
