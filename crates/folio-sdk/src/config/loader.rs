//! Config file discovery and loading for `.folio.toml`.
//!
//! Only the project-local file in the working directory is consulted.

use std::path::{Path, PathBuf};

use super::FolioConfig;

pub const CONFIG_FILENAME: &str = ".folio.toml";

/// Load config from `<project_dir>/.folio.toml`, or return defaults when absent.
///
/// Relative paths in the config stay relative; callers run from the project
/// directory.
pub fn load_config(project_dir: &Path) -> Result<FolioConfig, ConfigError> {
    let path = project_dir.join(CONFIG_FILENAME);
    if !path.is_file() {
        tracing::debug!(?path, "No config file, using defaults");
        return Ok(FolioConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let config: FolioConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse { path: path.clone(), source: e })?;

    tracing::debug!(?path, "Loaded config");
    Ok(config)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.site.template, PathBuf::from("index.tera"));
        assert_eq!(config.site.output, PathBuf::from("index.html"));
        assert_eq!(config.site.asset_dir, PathBuf::from("dist"));
        assert_eq!(
            config.resume.template,
            PathBuf::from("templates/resume.tex.tera")
        );
        assert_eq!(config.resume.output, PathBuf::from("resume.pdf"));
        assert_eq!(config.resume.compiler, "pdflatex");
        assert_eq!(config.resume.probe_timeout(), Duration::from_secs(10));
        assert_eq!(config.resume.compile_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
data-dir = "content"

[site]
template = "site/page.tera"
asset-dir = "public/css"

[resume]
compiler = "/opt/texlive/bin/pdflatex"
compile-timeout-secs = 90
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("content"));
        assert_eq!(config.site.template, PathBuf::from("site/page.tera"));
        assert_eq!(config.site.output, PathBuf::from("index.html"));
        assert_eq!(config.site.asset_dir, PathBuf::from("public/css"));
        assert_eq!(config.resume.compiler, "/opt/texlive/bin/pdflatex");
        assert_eq!(config.resume.compile_timeout_secs, 90);
        assert_eq!(config.resume.probe_timeout_secs, 10);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.resume.output, PathBuf::from("resume.pdf"));
    }

    #[test]
    fn test_load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.site.output, PathBuf::from("index.html"));
    }

    #[test]
    fn test_load_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[resume]\noutput = \"cv.pdf\"\n",
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.resume.output, PathBuf::from("cv.pdf"));
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "data-dir = [unclosed").unwrap();

        let result = load_config(dir.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
