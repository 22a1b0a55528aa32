//! Output sinks: write rendered HTML, or compile rendered LaTeX to PDF.

pub mod html;
pub mod latex;
pub mod pdf;

pub use html::{asset_dir_present, write_html, SinkError};
pub use latex::{CompileError, CompilerRun, LatexCompiler};
pub use pdf::{PdfError, PdfOutcome, PdfSink};

#[cfg(all(test, unix))]
mod testing;
