//! Shared SDK for folio: data loading, template rendering, and document output.
//!
//! This crate provides the pipeline consumed by the `generate-site` and
//! `generate-resume` binaries in `folio-ctl`:
//!
//! load YAML → aggregate into a [`DataSet`] → render a Tera template → write
//! HTML directly, or compile LaTeX to PDF through an external compiler.
//!
//! # Modules
//!
//! - [`config`]: `.folio.toml` discovery and defaults
//! - [`data`]: YAML data files aggregated into a schema-free [`DataSet`]
//! - [`template_engine`]: Tera rendering with located diagnostics
//! - [`sink`]: HTML writer and the LaTeX → PDF compilation policy
//! - [`error`]: aggregate error type for the drivers

pub mod config;
pub mod data;
pub mod error;
pub mod sink;
pub mod template_engine;

pub use config::FolioConfig;
pub use data::{load_data, DataKey, DataSet};
pub use error::{FolioError, FolioResult};
pub use template_engine::{RenderError, RenderTrace, TemplateRenderer};
