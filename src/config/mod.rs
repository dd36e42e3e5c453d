//! Runtime settings gathered from the command line

use serde::{Deserialize, Serialize};

/// How the result of a dispatch is written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The rendered value alone, without a trailing newline
    #[default]
    Text,
    /// An invocation report as a single JSON document
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    pub format: OutputFormat,
    pub verbosity: u8,
    /// Print the registry catalog instead of dispatching
    pub list: bool,
}

impl DispatchConfig {
    /// Log filter for the configured verbosity, used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Show target module for -vv and above
    pub fn show_target(&self) -> bool {
        self.verbosity >= 2
    }

    /// Show thread ids and line numbers for -vvv
    pub fn show_source_location(&self) -> bool {
        self.verbosity >= 3
    }
}
