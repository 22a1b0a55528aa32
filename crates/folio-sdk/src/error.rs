//! Aggregate error type for the generator drivers.

use crate::config::ConfigError;
use crate::data::DataError;
use crate::sink::{CompileError, PdfError, SinkError};
use crate::template_engine::{RenderError, RenderTrace};

pub type FolioResult<T> = Result<T, FolioError>;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}

impl FolioError {
    /// Template location for render failures, however they were wrapped.
    pub fn render_trace(&self) -> Option<&RenderTrace> {
        match self {
            FolioError::Render(e) | FolioError::Pdf(PdfError::Render(e)) => e.trace(),
            _ => None,
        }
    }

    /// The compiler failure, if PDF generation got as far as running it.
    pub fn compile_error(&self) -> Option<&CompileError> {
        match self {
            FolioError::Pdf(PdfError::Compile(e)) => Some(e),
            _ => None,
        }
    }
}
