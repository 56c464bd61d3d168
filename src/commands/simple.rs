//! Simple interactive CLI mode
//!
//! Line-oriented prompt without the TUI: asks for a start and an end word,
//! prints the ladder, and repeats until `quit`.

use super::solve::{SolveConfig, solve_ladder};
use crate::output::outcome_line;
use crate::solver::SearchOptions;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(dictionary: &Dictionary, options: SearchOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(stdin.lock(), stdout.lock(), dictionary, options)
}

/// Run the prompt loop over arbitrary input and output streams
///
/// Input ends on `quit`, `q`, `exit`, or end of stream.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_simple_with<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    dictionary: &Dictionary,
    options: SearchOptions,
) -> Result<()> {
    writeln!(output, "Word Ladder - {} words loaded", dictionary.len())?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    loop {
        let Some(start) = prompt(&mut input, &mut output, "Start word")? else {
            break;
        };
        let Some(end) = prompt(&mut input, &mut output, "End word")? else {
            break;
        };

        let config = SolveConfig::new(start, end).with_options(options);
        match solve_ladder(config, dictionary) {
            Ok(result) => writeln!(
                output,
                "{}\n",
                outcome_line(&result.start, &result.end, result.ladder.as_ref())
            )?,
            Err(e) => writeln!(output, "Error: {e}\n")?,
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

/// Read one trimmed line after a prompt; `None` means the user is done
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
