//! Display functions for command results

use super::formatters::{format_path, weight_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, LadderResult};
use crate::graph::GraphStats;
use crate::search::PathResult;
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {} ({})",
        result.start.to_uppercase().bright_yellow().bold(),
        result.goal.to_uppercase().bright_yellow().bold(),
        result.algorithm
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        PathResult::Found(path) => {
            println!("\n{}", format_path(path).bold());
            println!(
                "\n{}",
                format!(
                    "✅ {} steps, total weight {:.1}",
                    path.hops(),
                    path.total_weight()
                )
                .green()
                .bold()
            );
        }
        PathResult::NoPath => {
            println!(
                "\n{}",
                format!("❌ No ladder connects {} and {}", result.start, result.goal)
                    .red()
                    .bold()
            );
        }
        PathResult::Cancelled => {
            println!(
                "\n{}",
                "⏹  Search stopped before finding a ladder (budget exhausted)"
                    .yellow()
                    .bold()
            );
        }
    }

    if verbose {
        println!("   Expanded:   {} words", result.expanded);
        println!("   Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Count:      {}", result.count);
    println!(
        "   Component:  {} of {} words",
        result.component_size, result.total_words
    );

    if result.neighbors.is_empty() {
        println!("\n   {}", "No one-letter neighbors".bright_black());
        return;
    }

    println!("\n🔗 {}", "Neighbors:".bright_cyan().bold());
    let max_weight = result
        .neighbors
        .iter()
        .map(|&(_, w)| w)
        .fold(0.0, f64::max);
    for (neighbor, weight) in &result.neighbors {
        println!(
            "   {:<8} [{}] {}",
            neighbor.to_uppercase(),
            weight_bar(*weight, max_weight, 20).green(),
            format!("{weight:.1}").bright_yellow()
        );
    }
}

/// Print a graph summary
pub fn print_stats(stats: &GraphStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRAPH STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Structure:".bright_cyan().bold());
    if let Some(length) = stats.word_length {
        println!("   Word length:       {length}");
    }
    println!("   Words:             {}", stats.nodes);
    println!("   Edges:             {}", stats.edges);
    println!("   Linked buckets:    {}", stats.linked_buckets);
    println!("   Largest bucket:    {}", stats.largest_bucket);

    println!("\n🧩 {}", "Connectivity:".bright_cyan().bold());
    println!("   Components:        {}", stats.components);
    println!("   Largest component: {}", stats.largest_component);
    println!("   Isolated words:    {}", stats.isolated_words);
    println!("   Max degree:        {}", stats.max_degree);
    println!("   Mean degree:       {:.2}", stats.mean_degree);

    if let (Some(min), Some(max)) = (stats.min_edge_weight, stats.max_edge_weight) {
        println!("\n⚖️  {}", "Edge weights:".bright_cyan().bold());
        println!("   Min:               {min:.1}");
        println!("   Max:               {max:.1}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Pairs tested:   {}", result.pairs);
    println!("   Time taken:     {:.2}s", result.duration.as_secs_f64());

    for total in &result.totals {
        println!("\n🔎 {}", total.algorithm.bright_cyan().bold());
        println!("   Found:          {}", total.found);
        println!("   No path:        {}", total.no_path);
        if total.cancelled > 0 {
            println!("   Cancelled:      {}", format!("{}", total.cancelled).yellow());
        }
        println!(
            "   Avg expanded:   {}",
            format!("{:.1}", total.average_expanded()).bright_yellow()
        );
        println!(
            "   Search time:    {:.3}ms",
            total.duration.as_secs_f64() * 1000.0
        );
    }

    println!();
    if result.disagreements.is_empty() {
        println!("{}", "✅ All algorithms agree on ladder weights".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} pairs disagree:", result.disagreements.len())
                .red()
                .bold()
        );
        for (start, goal) in &result.disagreements {
            println!("   {start} → {goal}");
        }
    }
}
