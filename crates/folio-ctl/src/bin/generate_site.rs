//! Render `index.tera` with the YAML data files into `index.html`.

use std::process::ExitCode;

use clap::Parser;

/// Generate the portfolio site page from YAML data and a Tera template
#[derive(Parser, Debug)]
#[command(name = "generate-site", version, styles = folio_ctl::clap_styles())]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    folio_ctl::init_tracing();
    folio_ctl::commands::site::run()
}
