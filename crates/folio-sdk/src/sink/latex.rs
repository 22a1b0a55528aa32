//! External LaTeX compiler invocation.
//!
//! Uses the compiler CLI via `tokio::process::Command`, bounded by
//! `tokio::time::timeout`. A run that times out is killed when its future is
//! dropped.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::ResumeConfig;

/// Exit status and full captured output of one compiler run.
#[derive(Debug, Clone)]
pub struct CompilerRun {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CompilerRun {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A LaTeX compiler executable (`pdflatex` by default) with its timeouts.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    program: String,
    probe_timeout: Duration,
    compile_timeout: Duration,
}

impl LatexCompiler {
    pub fn new(
        program: impl Into<String>,
        probe_timeout: Duration,
        compile_timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            probe_timeout,
            compile_timeout,
        }
    }

    pub fn from_config(config: &ResumeConfig) -> Self {
        Self::new(
            config.compiler.clone(),
            config.probe_timeout(),
            config.compile_timeout(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check the compiler is invocable with `--version`.
    ///
    /// Returns the first line of the version banner.
    pub async fn probe(&self) -> Result<String, CompileError> {
        let run = self
            .run(["--version"], None, self.probe_timeout)
            .await
            .map_err(|e| CompileError::Unavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !run.success() {
            return Err(CompileError::Unavailable {
                program: self.program.clone(),
                reason: format!("`--version` {}", describe_exit(&run.exit_code)),
            });
        }

        let banner = run
            .stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();
        tracing::debug!(program = %self.program, %banner, "Compiler probe succeeded");
        Ok(banner)
    }

    /// Compile `tex_file` in batch mode, writing every generated file into
    /// `output_dir`. Any exit status is returned as a [`CompilerRun`]; only
    /// spawn failures and timeouts are errors.
    pub async fn compile(
        &self,
        tex_file: &Path,
        output_dir: &Path,
    ) -> Result<CompilerRun, CompileError> {
        let args = [
            OsStr::new("-interaction=nonstopmode"),
            OsStr::new("-output-directory"),
            output_dir.as_os_str(),
            tex_file.as_os_str(),
        ];
        tracing::debug!(
            program = %self.program,
            tex = ?tex_file,
            out = ?output_dir,
            "Running LaTeX compiler"
        );

        let run = self
            .run(args, Some(output_dir), self.compile_timeout)
            .await?;
        tracing::debug!(exit_code = ?run.exit_code, "LaTeX compiler finished");
        Ok(run)
    }

    async fn run<I, S>(
        &self,
        args: I,
        current_dir: Option<&Path>,
        timeout: Duration,
    ) -> Result<CompilerRun, CompileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = current_dir {
            cmd.current_dir(dir);
        }

        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(result) => result.map_err(|e| CompileError::Spawn {
                program: self.program.clone(),
                source: e,
            })?,
            Err(_) => {
                return Err(CompileError::Timeout {
                    program: self.program.clone(),
                    timeout,
                })
            }
        };

        Ok(CompilerRun {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("LaTeX compiler '{program}' is not installed or not runnable: {reason}")]
    Unavailable { program: String, reason: String },

    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {} seconds", timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("compiler reported success but no PDF was generated")]
    MissingArtifact,

    #[error("LaTeX compilation failed ({}) and no PDF was generated", describe_exit(.exit_code))]
    NoArtifact {
        exit_code: Option<i32>,
        /// Last characters of the compiler's stdout.
        stdout_tail: String,
        /// Last characters of the compiler's stderr.
        stderr_tail: String,
    },
}
