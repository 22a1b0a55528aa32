//! Load the YAML data files from a data directory.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::{DataKey, DataSet, DataSource, SourceStatus};

/// Load every category from `data_dir` into a [`DataSet`].
///
/// A missing file is not an error: the category becomes an empty mapping.
/// An unreadable file or invalid YAML aborts the load.
pub fn load_data(data_dir: &Path) -> Result<DataSet, DataError> {
    if !data_dir.is_dir() {
        return Err(DataError::MissingDirectory {
            path: data_dir.to_path_buf(),
        });
    }

    let mut data = DataSet::empty();

    for key in DataKey::ALL {
        let path = data_dir.join(key.filename());
        if !path.exists() {
            tracing::warn!(?path, key = %key, "Data file not found, using empty mapping");
            data.record(DataSource {
                key,
                path,
                status: SourceStatus::Missing,
            });
            continue;
        }

        let value = load_yaml_file(&path)?;
        tracing::info!(?path, key = %key, "Loaded data file");
        data = data.with(key, value);
        data.record(DataSource {
            key,
            path,
            status: SourceStatus::Loaded,
        });
    }

    Ok(data)
}

fn load_yaml_file(path: &Path) -> Result<Value, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_yaml::from_str(&contents).map_err(|e| DataError::Yaml {
        path: path.to_path_buf(),
        source: e,
    })?;

    // An empty document parses as null
    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("data directory {} not found", path.display())]
    MissingDirectory { path: PathBuf },
    #[error("failed to read data file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid YAML in '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
