//! Log subscriber setup.
//!
//! Logs go to stderr so `trace --format jsonl` on stdout stays machine
//! readable. The filter comes from `SORTVIZ_LOG`, then `RUST_LOG`, then the
//! `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

use crate::cli::{GlobalArgs, LogFormat};
use crate::error::{CliError, Result};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "SORTVIZ_LOG";

/// Filter directive implied by the verbosity flags.
#[must_use]
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// First usable filter among `SORTVIZ_LOG`, `RUST_LOG` and the flags.
#[must_use]
pub fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    filter_from(
        [LOG_ENV, "RUST_LOG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok()),
        verbose,
        quiet,
    )
}

fn filter_from(
    candidates: impl IntoIterator<Item = String>,
    verbose: u8,
    quiet: bool,
) -> EnvFilter {
    candidates
        .into_iter()
        .filter(|spec| !spec.trim().is_empty())
        .find_map(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose, quiet)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(global: &GlobalArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(global.verbose, global.quiet))
        .with_writer(std::io::stderr);
    let installed = match global.log_format {
        LogFormat::Text => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };
    installed.map_err(|err| CliError::Logging {
        message: err.to_string(),
    })
}
