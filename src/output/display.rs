//! Display functions for command results

use super::formatters::{create_progress_bar, outcome_line};
use crate::commands::{BenchmarkResult, LadderResult, NeighborsResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    let line = outcome_line(&result.start, &result.end, result.ladder.as_ref());
    if result.ladder.is_some() {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }

    if !verbose {
        return;
    }

    println!("{}", "─".repeat(60).cyan());
    if let Some(ladder) = &result.ladder {
        for (step, word) in ladder.iter().enumerate() {
            println!(
                "  {:>2}. {}",
                step.to_string().bright_black(),
                word.text().to_uppercase().bright_white().bold()
            );
        }
        println!("  Steps:          {}", ladder.steps());
    }
    println!("  Graph words:    {}", result.graph_words);
    println!("  Expanded:       {}", result.expanded);
    println!("  Scheduled:      {}", result.scheduled);
    println!(
        "  Time taken:     {:.3}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the buckets and neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Neighbors of {}{}",
        result.word.text().to_uppercase().bright_yellow().bold(),
        if result.in_dictionary {
            String::new()
        } else {
            " (not in dictionary)".bright_black().to_string()
        }
    );
    println!("{}", "─".repeat(60).cyan());

    for bucket in &result.buckets {
        let words = bucket
            .words
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {}  {:>3}  {}",
            bucket.pattern.text().to_uppercase().bright_cyan(),
            bucket.words.len(),
            words
        );
    }

    println!(
        "\n{} {}",
        "Unvisited neighbors:".bright_cyan().bold(),
        result.neighbors.len()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!("   No ladder:        {}", format!("{}", result.missing).yellow());
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Shortest:         {}", result.min_steps);
    println!("   Longest:          {}", result.max_steps);
    println!("   Avg expanded:     {:.1}", result.average_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut steps: Vec<_> = result.distribution.iter().collect();
    steps.sort_unstable();
    for (&step_count, &count) in steps {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {step_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

