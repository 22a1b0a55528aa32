//! `generate-site`: render the portfolio page to HTML.

use std::process::ExitCode;

use folio_sdk::sink::{asset_dir_present, write_html};
use folio_sdk::{FolioConfig, FolioResult, TemplateRenderer};

use super::{load_data_reported, load_project_config, report_failure, require_inputs};
use crate::output;

pub fn run() -> ExitCode {
    output::banner("Portfolio Site Generator");

    let Some(config) = load_project_config() else {
        return ExitCode::FAILURE;
    };
    if !require_inputs(&config.site.template, &config.data_dir) {
        return ExitCode::FAILURE;
    }

    match generate(&config) {
        Ok(()) => {
            output::blank();
            output::success("Site generation completed successfully!");
            output::label("Output", config.site.output.display());
            output::hint("Don't forget to build your CSS with: npm run build-css");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure("Site generation failed", &e);
            ExitCode::FAILURE
        }
    }
}

fn generate(config: &FolioConfig) -> FolioResult<()> {
    let data = load_data_reported(&config.data_dir)?;

    output::header("Rendering template...");
    let renderer = TemplateRenderer::from_file(&config.site.template)?;
    let html = renderer.render(&data)?;
    write_html(&config.site.output, &html)?;
    output::success(format!(
        "Successfully generated {}",
        config.site.output.display()
    ));

    if !asset_dir_present(&config.site.asset_dir) {
        output::warning(format!(
            "{} directory not found. Make sure to run the Tailwind CSS build.",
            config.site.asset_dir.display()
        ));
    }
    Ok(())
}
