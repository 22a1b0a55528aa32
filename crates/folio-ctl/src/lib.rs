//! Drivers for the `generate-site` and `generate-resume` binaries.
//!
//! Each driver reads `.folio.toml` from the working directory, checks its
//! inputs, runs the `folio-sdk` pipeline, and maps the result to an exit
//! code. All user-facing text goes through [`output`]; diagnostics go
//! through `tracing` to stderr.

pub mod commands;
pub(crate) mod output;

pub use output::clap_styles;

use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber. `RUST_LOG` controls verbosity;
/// only errors are shown when it is unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
