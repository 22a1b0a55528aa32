//! Tera-based template renderer over a [`DataSet`].

use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use super::filters;
use super::trace::RenderTrace;
use crate::data::DataSet;

/// A single parsed template, ready to render against a [`DataSet`].
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
    name: String,
    source: String,
}

impl TemplateRenderer {
    /// Read and parse a template file. The path doubles as the template name
    /// in diagnostics.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| RenderError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_source(&path.display().to_string(), source)
    }

    /// Parse template text registered under `name`.
    pub fn from_source(name: &str, source: impl Into<String>) -> Result<Self, RenderError> {
        let source = source.into();

        let mut tera = Tera::default();
        // Output is HTML or LaTeX; escaping is the template's job
        tera.autoescape_on(Vec::new());
        tera.register_filter("latex_escape", filters::latex_escape);
        tera.register_filter("kebab_case", filters::kebab_case);

        tera.add_raw_template(name, &source).map_err(|e| {
            let trace = RenderTrace::from_tera(name, &source, &e);
            tracing::error!(
                template = %name,
                line = ?trace.line,
                error = %trace.message(),
                "Template failed to parse"
            );
            RenderError::Parse(trace)
        })?;

        Ok(Self {
            tera,
            name: name.to_string(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with each data category as a top-level variable.
    pub fn render(&self, data: &DataSet) -> Result<String, RenderError> {
        let context = build_context(data)?;

        self.tera.render(&self.name, &context).map_err(|e| {
            let trace = RenderTrace::from_tera(&self.name, &self.source, &e);
            tracing::error!(
                template = %self.name,
                line = ?trace.line,
                enclosing = ?trace.enclosing.as_ref().map(|b| b.header.as_str()),
                error = %trace.message(),
                "Template rendering failed"
            );
            RenderError::Render(trace)
        })
    }
}

fn build_context(data: &DataSet) -> Result<Context, RenderError> {
    let mut context = Context::new();
    for (key, value) in data.iter() {
        context
            .try_insert(key.as_str(), value)
            .map_err(|e| RenderError::Context {
                key: key.to_string(),
                source: e,
            })?;
    }
    Ok(context)
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read template '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template parse error in {0}")]
    Parse(RenderTrace),
    #[error("template render error in {0}")]
    Render(RenderTrace),
    #[error("data for '{key}' cannot be exposed to templates: {source}")]
    Context { key: String, source: tera::Error },
}

impl RenderError {
    /// Location details, for parse and render failures.
    pub fn trace(&self) -> Option<&RenderTrace> {
        match self {
            RenderError::Parse(trace) | RenderError::Render(trace) => Some(trace),
            _ => None,
        }
    }
}
