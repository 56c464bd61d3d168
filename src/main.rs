//! Word Ladder - CLI
//!
//! Word ladder solver with TUI and CLI modes using a wildcard-pattern index and
//! best-first search.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{BenchmarkConfig, SolveConfig, list_neighbors, run_benchmark, run_simple, solve_ladder},
    graph::NeighborMode,
    output::{print_benchmark_result, print_ladder_result, print_neighbors_result},
    solver::{CostModel, IncrementScope, SearchOptions, VowelRule},
    wordlists::{
        Dictionary,
        loader::{embedded, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver using wildcard-pattern indexing and best-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// How the path cost grows
    #[arg(long, global = true, value_enum, default_value_t = CostArg::PerEdge)]
    cost: CostArg,

    /// Which changed letters cost a step
    #[arg(long, global = true, value_enum, default_value_t = VowelsArg::All)]
    vowels: VowelsArg,

    /// How repeated neighbor hits are reported
    #[arg(long, global = true, value_enum, default_value_t = NeighborsArg::Distinct)]
    neighbors: NeighborsArg,

    /// Use the legacy scoring with raw neighbor lists (overrides the above)
    #[arg(long, global = true)]
    legacy: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line prompt without TUI)
    Simple,

    /// Find a ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,

        /// Show every step and search statistics
        #[arg(long)]
        details: bool,
    },

    /// List the wildcard buckets and neighbors of a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Solve random word pairs and report search statistics
    Benchmark {
        /// Number of random pairs to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to draw pairs from
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Seed for pair selection
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CostArg {
    /// Each edge costs its own changed letters (default)
    PerEdge,
    /// Last two words of the path, summed per expansion round
    #[value(alias = "trailing-pair")]
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VowelsArg {
    /// Every changed letter costs a step (default)
    All,
    /// Only changes into a vowel cost a step
    #[value(alias = "vowels")]
    VowelsOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NeighborsArg {
    /// Each neighbor once, never the word itself (default)
    Distinct,
    /// Every bucket hit
    Raw,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        if self.legacy {
            return SearchOptions::legacy();
        }

        let scope = match self.cost {
            CostArg::PerEdge => IncrementScope::PerEdge,
            CostArg::Legacy => IncrementScope::TrailingPair,
        };
        let vowels = match self.vowels {
            VowelsArg::All => VowelRule::CountAllDifferingPositions,
            VowelsArg::VowelsOnly => VowelRule::VowelsOnly,
        };
        let neighbors = match self.neighbors {
            NeighborsArg::Distinct => NeighborMode::Distinct,
            NeighborsArg::Raw => NeighborMode::Raw,
        };

        SearchOptions::new(CostModel::new(vowels, scope), neighbors)
    }
}

/// Install the log subscriber; output goes to stderr so stdout stays clean
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary named by the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    let dictionary = match source {
        "embedded" => embedded(),
        path => load_from_file(path).with_context(|| format!("failed to load dictionary from '{path}'"))?,
    };

    if dictionary.is_empty() {
        warn!(source, "dictionary is empty");
    }
    info!(source, words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    let options = cli.search_options();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, options),
        Commands::Simple => run_simple(&dictionary, options),
        Commands::Solve {
            start,
            end,
            details,
        } => run_solve_command(start, end, details, &dictionary, options),
        Commands::Neighbors { word } => run_neighbors_command(&word, &dictionary, options),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(count, length, seed, &dictionary, options),
    }
}

fn run_solve_command(
    start: String,
    end: String,
    details: bool,
    dictionary: &Dictionary,
    options: SearchOptions,
) -> Result<()> {
    let config = SolveConfig::new(start, end).with_options(options);
    let result = solve_ladder(config, dictionary).context("cannot solve ladder")?;

    print_ladder_result(&result, details);
    Ok(())
}

fn run_neighbors_command(word: &str, dictionary: &Dictionary, options: SearchOptions) -> Result<()> {
    let result = list_neighbors(word, dictionary, options.neighbors).context("cannot list neighbors")?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    length: usize,
    seed: u64,
    dictionary: &Dictionary,
    options: SearchOptions,
) -> Result<()> {
    println!("Running benchmark on {count} random pairs of {length}-letter words...");

    let config = BenchmarkConfig {
        count,
        length,
        seed,
        options,
        show_progress: true,
    };
    let result = run_benchmark(&config, dictionary).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &Dictionary, options: SearchOptions) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(dictionary, options);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("word_ladder").chain(args.iter().copied()))
    }

    #[test]
    fn default_flags_give_default_options() {
        let cli = parse(&["solve", "cat", "dog"]).unwrap();
        assert_eq!(cli.search_options(), SearchOptions::default());
    }

    #[test]
    fn named_policies_are_parsed() {
        let cli = parse(&["--cost", "legacy", "--vowels", "vowels-only", "--neighbors", "raw", "simple"]).unwrap();
        let options = cli.search_options();
        assert_eq!(options.cost.scope, IncrementScope::TrailingPair);
        assert_eq!(options.cost.vowels, VowelRule::VowelsOnly);
        assert_eq!(options.neighbors, NeighborMode::Raw);

        let cli = parse(&["--cost", "trailing-pair", "simple"]).unwrap();
        assert_eq!(cli.search_options().cost.scope, IncrementScope::TrailingPair);
    }

    #[test]
    fn misspelled_policy_is_rejected() {
        assert!(parse(&["--cost", "legcy", "simple"]).is_err());
        assert!(parse(&["--vowels", "vowel-only", "simple"]).is_err());
        assert!(parse(&["--neighbors", "distict", "simple"]).is_err());
    }

    #[test]
    fn legacy_flag_overrides_named_policies() {
        let cli = parse(&["--legacy", "--vowels", "vowels-only", "solve", "cat", "dog"]).unwrap();
        assert_eq!(cli.search_options(), SearchOptions::legacy());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
