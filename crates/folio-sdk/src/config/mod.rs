//! Project configuration for the site and resume generators.
//!
//! Every field has a default matching the conventional project layout, so a
//! missing `.folio.toml` is the common case, not an error.

pub mod loader;

pub use loader::{load_config, ConfigError, CONFIG_FILENAME};

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_site_template() -> PathBuf {
    PathBuf::from("index.tera")
}

fn default_site_output() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_resume_template() -> PathBuf {
    PathBuf::from("templates/resume.tex.tera")
}

fn default_resume_output() -> PathBuf {
    PathBuf::from("resume.pdf")
}

fn default_compiler() -> String {
    "pdflatex".to_string()
}

fn default_probe_timeout_secs() -> u64 {
    10
}

fn default_compile_timeout_secs() -> u64 {
    30
}

/// Top-level configuration, parsed from `.folio.toml`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FolioConfig {
    /// Directory holding the YAML data files. Default: `data`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub resume: ResumeConfig,
}

/// Settings for `generate-site`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Tera template rendered into the site page. Default: `index.tera`.
    #[serde(default = "default_site_template")]
    pub template: PathBuf,

    /// Output HTML path. Default: `index.html`.
    #[serde(default = "default_site_output")]
    pub output: PathBuf,

    /// Stylesheet build output, checked after rendering. Default: `dist`.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

/// Settings for `generate-resume`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ResumeConfig {
    /// Tera template producing LaTeX source. Default: `templates/resume.tex.tera`.
    #[serde(default = "default_resume_template")]
    pub template: PathBuf,

    /// Output PDF path. Default: `resume.pdf`.
    #[serde(default = "default_resume_output")]
    pub output: PathBuf,

    /// LaTeX compiler executable. Default: `pdflatex`.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Timeout for the `--version` probe. Default: 10.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Timeout for a compile run. Default: 30.
    #[serde(default = "default_compile_timeout_secs")]
    pub compile_timeout_secs: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            site: SiteConfig::default(),
            resume: ResumeConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            template: default_site_template(),
            output: default_site_output(),
            asset_dir: default_asset_dir(),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            template: default_resume_template(),
            output: default_resume_output(),
            compiler: default_compiler(),
            probe_timeout_secs: default_probe_timeout_secs(),
            compile_timeout_secs: default_compile_timeout_secs(),
        }
    }
}

impl ResumeConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.compile_timeout_secs)
    }
}
