//! Schema-free career data aggregated from a fixed set of YAML files.
//!
//! Only the five top-level categories are fixed; what lives under each one is
//! defined by the templates that consume it.

mod loader;

pub use loader::{load_data, DataError};

use std::fmt;
use std::path::PathBuf;

use serde_yaml::{Mapping, Value};

/// One of the five data categories, each backed by `<name>.yml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataKey {
    Personal,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl DataKey {
    pub const ALL: [DataKey; 5] = [
        DataKey::Personal,
        DataKey::Skills,
        DataKey::Experience,
        DataKey::Projects,
        DataKey::Contact,
    ];

    /// Template variable name.
    pub fn as_str(self) -> &'static str {
        match self {
            DataKey::Personal => "personal",
            DataKey::Skills => "skills",
            DataKey::Experience => "experience",
            DataKey::Projects => "projects",
            DataKey::Contact => "contact",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            DataKey::Personal => "personal.yml",
            DataKey::Skills => "skills.yml",
            DataKey::Experience => "experience.yml",
            DataKey::Projects => "projects.yml",
            DataKey::Contact => "contact.yml",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a data file was found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Loaded,
    Missing,
}

/// Where a category's value came from.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub key: DataKey,
    pub path: PathBuf,
    pub status: SourceStatus,
}

/// The template namespace: every [`DataKey`] mapped to a parsed YAML value.
///
/// All five keys are always present. A category with no backing file holds
/// an empty mapping.
#[derive(Debug, Clone)]
pub struct DataSet {
    values: [Value; 5],
    sources: Vec<DataSource>,
}

impl DataSet {
    /// A data set where every category is an empty mapping.
    pub fn empty() -> Self {
        Self {
            values: std::array::from_fn(|_| Value::Mapping(Mapping::new())),
            sources: Vec::new(),
        }
    }

    /// Replace one category's value.
    pub fn with(mut self, key: DataKey, value: Value) -> Self {
        self.values[key.index()] = value;
        self
    }

    pub(crate) fn record(&mut self, source: DataSource) {
        self.sources.push(source);
    }

    pub fn get(&self, key: DataKey) -> &Value {
        &self.values[key.index()]
    }

    /// Categories in declaration order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (DataKey, &Value)> + '_ {
        DataKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Per-file load results, in load order. Empty for hand-built data sets.
    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    /// Categories whose value carries no data (absent file, empty document,
    /// or an empty collection/string).
    pub fn missing_keys(&self) -> Vec<DataKey> {
        self.iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(key, _)| key)
            .collect()
    }
}

impl Default for DataSet {
    fn default() -> Self {
        Self::empty()
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_blank(&tagged.value),
    }
}
