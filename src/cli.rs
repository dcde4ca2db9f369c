//! CLI surface: clap definitions, verbosity, and user-facing reporting.

use crate::compare::Mismatch;
use crate::error::VerifyError;
use clap::Parser;
use std::path::PathBuf;

/// Relcheck CLI - downloads a release archive and compares it to a local directory
#[derive(Parser, Debug)]
#[command(name = "relcheck")]
#[command(about = "Downloads a release archive and compares it to a local directory")]
pub struct Cli {
    /// Do not print any output
    #[arg(long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Print per-entry comparison detail
    #[arg(long)]
    pub verbose: bool,

    /// Archive download URL
    pub url: String,

    /// Path to the local directory to compare against
    pub path: PathBuf,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.silent {
            Verbosity::Silent
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
}

/// User-facing output, gated by verbosity.
///
/// Status and diagnostics go to stdout, fatal errors to stderr; every line
/// is suppressed under `--silent`.
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Progress and verdict lines, printed unless silent.
    pub fn status(&self, message: &str) {
        if self.verbosity != Verbosity::Silent {
            println!("{}", message);
        }
    }

    /// Mismatch diagnostics, printed on failure unless silent.
    pub fn mismatch(&self, mismatch: &Mismatch) {
        if self.verbosity != Verbosity::Silent {
            println!("{}", mismatch);
        }
    }

    /// Fatal run errors, printed unless silent.
    pub fn fatal(&self, error: &VerifyError) {
        if self.verbosity != Verbosity::Silent {
            eprintln!("{}", error);
        }
    }
}
