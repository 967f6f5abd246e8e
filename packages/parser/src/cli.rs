//! Command-line interface for the parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::validate_input_path;
use crate::error::Result;
use crate::output::{generate_json, save_json};
use crate::parser::parse_rows;
use crate::reader::read_file;

/// Homeowner Parser - Parse homeowner name columns from CSV files.
#[derive(Parser)]
#[command(name = "homeowner-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a homeowner file and emit person records as JSON.
    Parse {
        /// Input file (.csv or .txt) with homeowner values in the first column
        file: PathBuf,

        /// Output JSON file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, output } => parse_command(&file, output.as_deref()),
    }
}

/// Execute the parse command.
fn parse_command(file: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    // Validate the input before reading anything
    validate_input_path(file)?;

    println!(
        "{} {}",
        style("Parsing").bold(),
        style(file.display()).cyan()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Reading rows...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let rows = match read_file(file) {
        Ok(rows) => rows,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Parsing names...");

    let people = match parse_rows(&rows) {
        Ok(people) => people,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Rows: {}", style(rows.len()).green());
    println!("  People: {}", style(people.len()).green());
    println!();

    match output {
        Some(output_path) => {
            let saved = save_json(&people, output_path)?;
            println!(
                "{} {}",
                style("Saved to:").green().bold(),
                saved.display()
            );
        }
        None => print!("{}", generate_json(&people)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["homeowner-parser", "parse", "homeowners.csv"]);

        let Commands::Parse { file, output } = cli.command;
        assert_eq!(file, PathBuf::from("homeowners.csv"));
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_file_with_output() {
        let cli = Cli::parse_from([
            "homeowner-parser",
            "parse",
            "homeowners.csv",
            "--output",
            "people.json",
        ]);

        let Commands::Parse { file, output } = cli.command;
        assert_eq!(file, PathBuf::from("homeowners.csv"));
        assert_eq!(output, Some(PathBuf::from("people.json")));
    }
}
