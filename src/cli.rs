//! Command-line argument parsing
//!
//! Runs one autocomplete cycle against a file: evaluate the trigger at a
//! cursor, list candidates, and optionally apply one of them.

use clap::Parser;
use std::path::PathBuf;

use crate::buffer::Position;

/// Column autocomplete for jira-search blocks
#[derive(Parser, Debug)]
#[command(
    name = "column-suggest",
    version,
    about = "Suggest columns for jira-search blocks"
)]
pub struct CliArgs {
    /// Markdown file to complete in
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Cursor line (1-indexed)
    #[arg(long, value_name = "N")]
    pub line: usize,

    /// Cursor column (1-indexed, defaults to end of line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Maximum number of candidates (overrides config)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print candidates as JSON
    #[arg(long)]
    pub json: bool,

    /// Apply the candidate at INDEX (0-based) and print the document
    #[arg(long, value_name = "INDEX")]
    pub select: Option<usize>,

    /// With --select, write the document back to FILE instead of printing it
    #[arg(long, requires = "select")]
    pub in_place: bool,
}

/// What the run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One rendered candidate per line
    List,
    /// Candidates as a JSON array
    Json,
    /// Apply a candidate and print the resulting document
    Apply { index: usize },
    /// Apply a candidate and overwrite the input file
    ApplyInPlace { index: usize },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub path: PathBuf,
    /// 0-indexed line; column is `None` for "end of line"
    pub line: usize,
    pub column: Option<usize>,
    pub limit: Option<usize>,
    pub config_path: Option<PathBuf>,
    pub mode: OutputMode,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.line == 0 {
            return Err("--line is 1-indexed".to_string());
        }
        if self.column == Some(0) {
            return Err("--column is 1-indexed".to_string());
        }

        let mode = match (self.select, self.in_place, self.json) {
            (Some(index), true, _) => OutputMode::ApplyInPlace { index },
            (Some(index), false, _) => OutputMode::Apply { index },
            (None, _, true) => OutputMode::Json,
            (None, _, false) => OutputMode::List,
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        Ok(RunConfig {
            path: self.path,
            line: self.line - 1,
            column: self.column.map(|c| c - 1),
            limit: self.limit,
            config_path: self.config,
            mode,
        })
    }
}

impl RunConfig {
    /// Cursor position, resolving "end of line" against the line length
    pub fn cursor(&self, line_length: usize) -> Position {
        Position::new(self.line, self.column.unwrap_or(line_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: usize, column: Option<usize>) -> CliArgs {
        CliArgs {
            path: PathBuf::from("notes.md"),
            line,
            column,
            limit: None,
            config: None,
            json: false,
            select: None,
            in_place: false,
        }
    }

    #[test]
    fn test_positions_become_zero_indexed() {
        let config = args(3, Some(10)).into_config().unwrap();
        assert_eq!(config.line, 2);
        assert_eq!(config.cursor(99), Position::new(2, 9));
        assert_eq!(config.mode, OutputMode::List);
    }

    #[test]
    fn test_missing_column_means_end_of_line() {
        let config = args(1, None).into_config().unwrap();
        assert_eq!(config.cursor(12), Position::new(0, 12));
    }

    #[test]
    fn test_zero_line_rejected() {
        assert!(args(0, None).into_config().is_err());
        assert!(args(1, Some(0)).into_config().is_err());
    }

    #[test]
    fn test_output_modes() {
        let mut a = args(1, None);
        a.json = true;
        assert_eq!(a.into_config().unwrap().mode, OutputMode::Json);

        let mut a = args(1, None);
        a.select = Some(2);
        assert_eq!(a.into_config().unwrap().mode, OutputMode::Apply { index: 2 });

        let mut a = args(1, None);
        a.select = Some(0);
        a.in_place = true;
        assert_eq!(
            a.into_config().unwrap().mode,
            OutputMode::ApplyInPlace { index: 0 }
        );
    }

    #[test]
    fn test_clap_parses_flags() {
        let parsed = CliArgs::try_parse_from([
            "column-suggest",
            "notes.md",
            "--line",
            "4",
            "--column",
            "12",
            "--select",
            "1",
            "--in-place",
        ])
        .unwrap();
        assert_eq!(parsed.line, 4);
        assert_eq!(parsed.column, Some(12));
        assert!(parsed.in_place);
    }

    #[test]
    fn test_in_place_requires_select() {
        let parsed =
            CliArgs::try_parse_from(["column-suggest", "notes.md", "--line", "1", "--in-place"]);
        assert!(parsed.is_err());
    }
}
