//! `generate-resume`: render the LaTeX resume and compile it to PDF.

use std::process::ExitCode;

use folio_sdk::sink::{CompileError, LatexCompiler, PdfOutcome, PdfSink};
use folio_sdk::{FolioConfig, FolioError, FolioResult, TemplateRenderer};

use super::{
    format_bytes, load_data_reported, load_project_config, report_failure, require_inputs,
};
use crate::output;

/// Packages the resume template depends on beyond a base TeX install.
const REQUIRED_PACKAGES: [&str; 5] = ["fontawesome5", "titlesec", "enumitem", "hyperref", "xcolor"];

pub async fn run() -> ExitCode {
    output::banner("Resume PDF Generator");

    let Some(config) = load_project_config() else {
        return ExitCode::FAILURE;
    };

    let compiler = LatexCompiler::from_config(&config.resume);
    match compiler.probe().await {
        Ok(banner) if banner.is_empty() => output::success("LaTeX installation found"),
        Ok(banner) => output::success(format!("LaTeX installation found ({banner})")),
        Err(e) => {
            output::error(e);
            install_guidance();
            return ExitCode::FAILURE;
        }
    }

    if !require_inputs(&config.resume.template, &config.data_dir) {
        return ExitCode::FAILURE;
    }

    match generate(&config, compiler).await {
        Ok(outcome) => {
            report_success(&config, &outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure("Resume generation failed", &e);
            if let Some(CompileError::NoArtifact {
                stdout_tail,
                stderr_tail,
                ..
            }) = e.compile_error()
            {
                output::dim("Error details:");
                output::dim(stdout_tail);
                output::dim(stderr_tail);
            }
            if !matches!(e, FolioError::Data(_) | FolioError::Config(_)) {
                package_hints();
            }
            ExitCode::FAILURE
        }
    }
}

async fn generate(config: &FolioConfig, compiler: LatexCompiler) -> FolioResult<PdfOutcome> {
    let data = load_data_reported(&config.data_dir)?;

    output::header("Generating PDF resume...");
    let renderer = TemplateRenderer::from_file(&config.resume.template)?;

    output::hint(format!(
        "Rendering and compiling LaTeX with {}...",
        compiler.program()
    ));
    let sink = PdfSink::new(compiler, config.resume.output.clone());
    let outcome = sink.generate(&renderer, &data).await?;
    output::success("Generated LaTeX source");

    if let PdfOutcome::Warnings { log_path } = &outcome {
        output::warning("PDF compiled with some LaTeX warnings (this is normal)");
        output::label("Detailed log saved to", log_path.display());
    }
    output::success(format!(
        "Successfully generated {}",
        config.resume.output.display()
    ));
    Ok(outcome)
}

fn report_success(config: &FolioConfig, outcome: &PdfOutcome) {
    output::blank();
    output::success("Resume generation completed successfully!");
    output::label("Output", config.resume.output.display());
    if let Ok(meta) = std::fs::metadata(&config.resume.output) {
        output::label("File size", format!("{} bytes", format_bytes(meta.len())));
    }
    if let PdfOutcome::Warnings { log_path } = outcome {
        output::label("Compiler log", log_path.display());
    }
}

fn install_guidance() {
    output::blank();
    output::hint("Please install LaTeX:");
    output::item("macOS: Install MacTeX from https://www.tug.org/mactex/");
    output::item("Ubuntu/Debian: sudo apt-get install texlive-latex-base texlive-latex-extra");
    output::item("Windows: Install MiKTeX from https://miktex.org/");
}

fn package_hints() {
    output::blank();
    output::hint("If PDF generation fails, you may need to install LaTeX packages:");
    for package in REQUIRED_PACKAGES {
        output::item(package);
    }
    output::blank();
    output::hint("On Ubuntu/Debian: sudo apt-get install texlive-latex-extra texlive-fonts-extra");
    output::hint("On macOS with MacTeX: Should be included");
    output::hint("On Windows with MiKTeX: Should auto-install packages");
}
