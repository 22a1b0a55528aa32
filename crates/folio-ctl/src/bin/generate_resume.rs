//! Render the LaTeX resume template with the YAML data files and compile it
//! to `resume.pdf`.

use std::process::ExitCode;

use clap::Parser;

/// Generate a PDF resume from YAML data and a LaTeX template
#[derive(Parser, Debug)]
#[command(name = "generate-resume", version, styles = folio_ctl::clap_styles())]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    folio_ctl::init_tracing();
    folio_ctl::commands::resume::run().await
}
