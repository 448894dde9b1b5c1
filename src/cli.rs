//! Command-line interface definition using clap.
//!
//! [`Args`] maps flags onto the library's configuration types, so the binary
//! only wires them together:
//!
//! ```rust
//! use chatstat::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstat", "chat.txt", "--user", "Alice", "--top-words", "20"]);
//! assert_eq!(args.scope().to_string(), "Alice");
//! assert_eq!(args.analysis_config().top_words, 20);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::analysis::Scope;
use crate::config::{AnalysisConfig, ParserConfig};
use crate::core::filter::FilterConfig;
use crate::error::Result;
use crate::format::ExportFormat;

/// Per-sender statistics for exported chat transcripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice
    chatstat chat.txt --after 2024-01-01 --json
    chatstat chat.txt --export records.csv
    chatstat chat.txt --list-senders")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Analyse one sender instead of the whole conversation
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Rows in the word-frequency table
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Rows in the emoji table
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_emojis: usize,

    /// Rows in the longest-messages table
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub top_messages: usize,

    /// Rows in the active-senders table
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub active_senders: usize,

    /// Extra word to leave out of the word-frequency table (repeatable)
    #[arg(long = "stop-word", value_name = "WORD")]
    pub stop_words: Vec<String>,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep encryption banners, media placeholders and membership events
    #[arg(long)]
    pub keep_notices: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the clean records to this file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the export file extension)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Print the sender names and exit
    #[arg(long)]
    pub list_senders: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn scope(&self) -> Scope {
        Scope::parse(&self.user)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_skip_system_notices(!self.keep_notices)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        self.stop_words.iter().fold(
            AnalysisConfig::new()
                .with_top_words(self.top_words)
                .with_top_emojis(self.top_emojis)
                .with_top_messages(self.top_messages)
                .with_active_senders(self.active_senders),
            |config, word| config.with_stop_word(word.as_str()),
        )
    }

    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    /// Resolved export target, if `--export` was given.
    pub fn export_target(&self) -> Option<Result<(PathBuf, ExportFormat)>> {
        let path = self.export.clone()?;
        let format = match self.format {
            Some(format) => Ok(format),
            None => ExportFormat::from_path(&path),
        };
        Some(format.map(|format| (path, format)))
    }

    /// Default `tracing` filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
