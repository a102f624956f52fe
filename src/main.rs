//! Word Ladder - CLI
//!
//! Builds a one-letter-neighbor graph from a vocabulary and searches it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use word_ladder::{
    commands::{LadderConfig, analyze_word, find_ladder, random_pairs, run_benchmark},
    core::Vocabulary,
    graph::{BuildConfig, GraphStats, WordGraph, WordGraphBuilder},
    logging::init_tracing,
    output::{print_analysis_result, print_benchmark_result, print_ladder_result, print_stats},
    search::{HeuristicMode, SearchAlgorithm, SearchBudget},
    wordlists::loader::{
        WordCounts, drop_repeated_letter_words, load_from_file, restrict_to_length, sample_counts,
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladders over fixed-length vocabularies with Dijkstra and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Vocabulary: 'sample' (default, embedded) or path to a word-count file
    #[arg(short = 'w', long, global = true, env = "WORD_LADDER_VOCABULARY", default_value = "sample")]
    vocabulary: String,

    /// Keep only words of this length
    #[arg(short, long, global = true, default_value = "3")]
    length: usize,

    /// Drop words made of one repeated letter (e.g. "aaa")
    #[arg(long, global = true)]
    drop_repeats: bool,

    /// Algorithm: dijkstra (default) or astar
    #[arg(short, long, global = true, default_value = "dijkstra")]
    algorithm: String,

    /// A* estimate: scaled (default) or hamming
    #[arg(long, global = true, default_value = "scaled")]
    heuristic: HeuristicMode,

    /// Stop a search after expanding this many words
    #[arg(long, global = true)]
    max_expansions: Option<usize>,

    /// Stop a search after this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Build the graph on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Show search statistics and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter, e.g. "trace" or "word_ladder=debug"
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a ladder between two words
    Ladder {
        /// Starting word
        start: String,
        /// Goal word
        goal: String,
    },

    /// Show a word's count and neighbors
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Summarize the graph
    Stats,

    /// Compare both algorithms on random word pairs
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load word counts based on the -w flag
fn load_counts(source: &str) -> Result<WordCounts> {
    match source {
        "sample" => Ok(sample_counts()),
        path => load_from_file(path).with_context(|| format!("loading vocabulary from {path}")),
    }
}

fn build_graph(cli: &Cli) -> Result<WordGraph> {
    let mut counts = restrict_to_length(load_counts(&cli.vocabulary)?, cli.length);
    if cli.drop_repeats {
        counts = drop_repeated_letter_words(counts);
    }

    let vocabulary = Vocabulary::new(counts).context("invalid vocabulary")?;
    let builder = WordGraphBuilder::new(BuildConfig {
        parallel: !cli.sequential,
    });
    Ok(builder.build(&vocabulary))
}

fn search_budget(cli: &Cli) -> SearchBudget {
    let mut budget = SearchBudget::unlimited();
    if let Some(max) = cli.max_expansions {
        budget = budget.with_max_expansions(max);
    }
    if let Some(ms) = cli.timeout_ms {
        budget = budget.with_timeout(Duration::from_millis(ms));
    }
    budget
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_level.as_deref()).context("initializing logging")?;

    // Reject unknown algorithms before touching the vocabulary
    let algorithm = cli
        .algorithm
        .parse::<SearchAlgorithm>()?
        .with_heuristic_mode(cli.heuristic);

    let graph = build_graph(&cli)?;
    if graph.is_empty() {
        anyhow::bail!(
            "no {}-letter words in vocabulary '{}'",
            cli.length,
            cli.vocabulary
        );
    }

    match &cli.command {
        Commands::Ladder { start, goal } => {
            let config = LadderConfig::new(start, goal).with_budget(search_budget(&cli));
            let result = find_ladder(&graph, &algorithm, config)?;
            print_ladder_result(&result, cli.verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&graph, word)?;
            print_analysis_result(&result);
        }
        Commands::Stats => print_stats(&GraphStats::compute(&graph)),
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random word pairs...");
            let pairs = random_pairs(&graph, *count, &mut rand::rng());
            let algorithms = SearchAlgorithm::all(cli.heuristic);
            let result = run_benchmark(&graph, &algorithms, &pairs, &search_budget(&cli), true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
