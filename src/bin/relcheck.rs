//! Relcheck CLI Binary
//!
//! Parses arguments, initializes logging, runs one verification, and maps
//! the outcome to an exit status: 0 equal, 1 not equal or fatal error,
//! 2 usage error (reported by clap before any work begins).

use clap::Parser;
use relcheck::cli::{Cli, Reporter, Verbosity};
use relcheck::compare::Comparison;
use relcheck::logging::{init_logging, LoggingConfig};
use relcheck::runner::{self, VerifyRequest};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("{}", e);
        process::exit(1);
    }

    info!("relcheck starting");

    let reporter = Reporter::new(cli.verbosity());
    let request = VerifyRequest {
        url: cli.url.clone(),
        local_root: cli.path.clone(),
    };

    let code = match runner::run(&request, &reporter) {
        Ok(Comparison::Equal) => {
            reporter.status("Comparison passed!");
            0
        }
        Ok(Comparison::NotEqual(mismatch)) => {
            reporter.mismatch(&mismatch);
            reporter.status("Comparison failed.");
            1
        }
        Err(e) => {
            error!("Verification aborted: {}", e);
            reporter.fatal(&e);
            1
        }
    };

    process::exit(code);
}

/// Map the verbosity flags onto the logging level: `--silent` disables
/// logging entirely, `--verbose` surfaces per-pair comparison detail.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    match cli.verbosity() {
        Verbosity::Silent => config.level = "off".to_string(),
        Verbosity::Verbose => config.level = "debug".to_string(),
        Verbosity::Normal => {}
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_disables_logging() {
        let cli = Cli::try_parse_from(["relcheck", "--silent", "u", "p"]).unwrap();
        let config = build_logging_config(&cli);
        assert_eq!(config.level, "off");
    }

    #[test]
    fn test_verbose_raises_level_to_debug() {
        let cli = Cli::try_parse_from(["relcheck", "--verbose", "u", "p"]).unwrap();
        let config = build_logging_config(&cli);
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn test_default_level_untouched() {
        let cli = Cli::try_parse_from(["relcheck", "u", "p"]).unwrap();
        let config = build_logging_config(&cli);
        assert_eq!(config.level, LoggingConfig::default().level);
    }
}
