//! Command handlers for the generator binaries.
//!
//! `site` and `resume` share the same front half (config, input checks, data
//! loading); the helpers for it live here.

pub mod resume;
pub mod site;

use std::path::Path;

use folio_sdk::config::load_config;
use folio_sdk::data::SourceStatus;
use folio_sdk::{load_data, DataSet, FolioConfig, FolioError, FolioResult};

use crate::output;

/// Load `.folio.toml` from the working directory, falling back to defaults
/// when it is absent. Prints the error and returns `None` when it is
/// malformed.
pub(crate) fn load_project_config() -> Option<FolioConfig> {
    match load_config(Path::new(".")) {
        Ok(config) => {
            tracing::debug!(?config, "Resolved project configuration");
            Some(config)
        }
        Err(e) => {
            output::error(format!("Error: {e}"));
            None
        }
    }
}

/// Check that the template and the data directory exist, printing an error
/// for the first one that does not.
pub(crate) fn require_inputs(template: &Path, data_dir: &Path) -> bool {
    if !template.is_file() {
        output::error(format!(
            "Error: Template file {} not found!",
            template.display()
        ));
        return false;
    }
    if !data_dir.is_dir() {
        output::error(format!(
            "Error: Data directory {} not found!",
            data_dir.display()
        ));
        return false;
    }
    true
}

/// Load every data file, reporting each one, then warn about categories that
/// came back empty.
pub(crate) fn load_data_reported(data_dir: &Path) -> FolioResult<DataSet> {
    output::header("Loading data files...");
    let data = load_data(data_dir)?;

    for source in data.sources() {
        let filename = source.key.filename();
        match source.status {
            SourceStatus::Loaded => output::success(format!("Loaded {filename}")),
            SourceStatus::Missing => {
                output::warning(format!("{filename} not found, skipping..."))
            }
        }
    }

    let missing = data.missing_keys();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|key| key.as_str()).collect();
        output::warning(format!("Missing data for: {}", names.join(", ")));
    }

    Ok(data)
}

/// Print a fatal error, with the template trace when there is one.
pub(crate) fn report_failure(context: &str, err: &FolioError) {
    output::blank();
    output::error(format!("{context}: {err}"));

    if let Some(trace) = err.render_trace() {
        output::dim(trace.frame());
        if let Some(line) = &trace.source_line {
            output::dim(format!("  {}", line.trim()));
        }
        output::dim(trace.message());
    }
}

/// `12345` -> `12,345`.
pub(crate) fn format_bytes(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
