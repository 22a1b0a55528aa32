//! Render LaTeX and compile it to the final PDF.
//!
//! The compiler runs inside a scoped temp directory that is removed on every
//! exit path. LaTeX commonly exits non-zero on mere warnings, so a non-zero
//! exit that still produced a PDF counts as success; the full compiler output
//! is then kept next to the PDF as a `.log` file.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::latex::{CompileError, CompilerRun, LatexCompiler};
use crate::data::DataSet;
use crate::template_engine::{RenderError, TemplateRenderer};

/// Base name of the intermediate document and the compiler's PDF.
pub const JOB_NAME: &str = "resume";

/// Characters of stdout/stderr reported on a hard failure.
pub const TAIL_CHARS: usize = 500;

/// How a successful compile went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutcome {
    /// Exit code zero.
    Clean,
    /// Non-zero exit, PDF produced anyway. Compiler output saved to `log_path`.
    Warnings { log_path: PathBuf },
}

/// Compiles rendered resume source into `output`.
#[derive(Debug, Clone)]
pub struct PdfSink {
    compiler: LatexCompiler,
    output: PathBuf,
    workspace_root: Option<PathBuf>,
}

impl PdfSink {
    pub fn new(compiler: LatexCompiler, output: impl Into<PathBuf>) -> Self {
        Self {
            compiler,
            output: output.into(),
            workspace_root: None,
        }
    }

    /// Create compile workspaces under `root` instead of the system temp dir.
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// `resume.pdf` -> `resume.log`.
    pub fn log_path(&self) -> PathBuf {
        self.output.with_extension("log")
    }

    /// Render the template and compile the result to [`Self::output`].
    pub async fn generate(
        &self,
        renderer: &TemplateRenderer,
        data: &DataSet,
    ) -> Result<PdfOutcome, PdfError> {
        // render failures are logged by the renderer
        let latex = renderer.render(data)?;
        self.compile_source(&latex).await
    }

    /// Compile already-rendered LaTeX source. Failures are logged here before
    /// they are returned.
    pub async fn compile_source(&self, latex: &str) -> Result<PdfOutcome, PdfError> {
        let result = self.compile_in_workspace(latex).await;
        if let Err(e) = &result {
            tracing::error!(output = ?self.output, error = %e, "PDF generation failed");
        }
        result
    }

    async fn compile_in_workspace(&self, latex: &str) -> Result<PdfOutcome, PdfError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("folio-latex-");
        let workspace = match &self.workspace_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| PdfError::Workspace { source: e })?;

        // `workspace` is dropped (and deleted) on every return below
        self.compile_in(workspace.path(), latex).await
    }

    async fn compile_in(&self, dir: &Path, latex: &str) -> Result<PdfOutcome, PdfError> {
        let tex_file = dir.join(format!("{JOB_NAME}.tex"));
        std::fs::write(&tex_file, latex).map_err(|e| PdfError::Workspace { source: e })?;
        tracing::debug!(tex = ?tex_file, "Wrote LaTeX source");

        let run = self.compiler.compile(&tex_file, dir).await?;
        let artifact = dir.join(format!("{JOB_NAME}.pdf"));

        match (run.success(), artifact.is_file()) {
            (true, true) => {
                self.copy_artifact(&artifact)?;
                Ok(PdfOutcome::Clean)
            }
            (true, false) => Err(CompileError::MissingArtifact.into()),
            (false, true) => {
                tracing::warn!(exit_code = ?run.exit_code, "PDF produced despite compiler errors");
                self.copy_artifact(&artifact)?;
                let log_path = self.write_log(&run)?;
                Ok(PdfOutcome::Warnings { log_path })
            }
            (false, false) => Err(CompileError::NoArtifact {
                exit_code: run.exit_code,
                stdout_tail: tail(&run.stdout, TAIL_CHARS),
                stderr_tail: tail(&run.stderr, TAIL_CHARS),
            }
            .into()),
        }
    }

    fn copy_artifact(&self, artifact: &Path) -> Result<(), PdfError> {
        std::fs::copy(artifact, &self.output).map_err(|e| PdfError::Copy {
            path: self.output.clone(),
            source: e,
        })?;
        tracing::debug!(output = ?self.output, "Copied PDF to output");
        Ok(())
    }

    fn write_log(&self, run: &CompilerRun) -> Result<PathBuf, PdfError> {
        let path = self.log_path();
        std::fs::write(&path, compilation_log(run)).map_err(|e| PdfError::Log {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}

fn compilation_log(run: &CompilerRun) -> String {
    let mut log = String::new();
    let _ = writeln!(log, "LaTeX Compilation Log");
    let _ = writeln!(log, "{}", "=".repeat(40));
    let _ = writeln!(log, "STDOUT:");
    log.push_str(&run.stdout);
    log.push_str("\n\nSTDERR:\n");
    log.push_str(&run.stderr);
    log
}

/// The last `n` characters of `s`.
pub fn tail(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("failed to prepare LaTeX workspace: {source}")]
    Workspace { source: std::io::Error },

    #[error("{0}")]
    Compile(#[from] CompileError),

    #[error("failed to copy PDF to {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write compilation log {}: {source}", path.display())]
    Log {
        path: PathBuf,
        source: std::io::Error,
    },
}
