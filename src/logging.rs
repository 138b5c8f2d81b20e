//! Logging setup for the command line tool, built on `tracing-subscriber`.
//!
//! Logs always go to standard error, so they never mix with a token dump on
//! standard output.
use std::io;

use tracing::debug;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when neither explicit directives nor `RUST_LOG` are present.
const DEFAULT_DIRECTIVES: &str = "warn";
/// Filter used for `--verbose`.
const VERBOSE_DIRECTIVES: &str = "warn,oxidec=debug";

/// Picks the filter: explicit directives win over `RUST_LOG`, which wins over the verbosity flag.
///
/// Directives that do not parse are reported and otherwise ignored.
fn filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if let Some(directives) = directives {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("Ignoring invalid log directives {directives:?}: {err}"),
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    })
}

/// Installs the global subscriber. Calling this more than once keeps the first one.
pub fn init(verbose: bool, directives: Option<&str>) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .without_time();

    if let Err(err) = tracing_subscriber::registry()
        .with(layer)
        .with(filter(verbose, directives))
        .try_init()
    {
        eprintln!("Logging is unavailable: {err}");
    }
    debug!(verbose, "logging initialized");
}
