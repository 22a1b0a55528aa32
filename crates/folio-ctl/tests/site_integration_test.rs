//! End-to-end tests for `generate-site`, run against scratch project
//! directories.

mod common;

use common::{stderr, stdout, Project};

const TEMPLATE: &str = r#"<h1>{{ personal.name }}</h1>
<ul>
{%- for lang in skills.languages %}
  <li>{{ lang }}</li>
{%- endfor %}
</ul>
{% if contact.email %}<a href="mailto:{{ contact.email }}">email</a>{% endif %}
"#;

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_generates_index_html() {
    let project = Project::with_full_data();
    project.write("index.tera", TEMPLATE);

    let output = project.run_site();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let html = project.read("index.html");
    assert!(html.contains("<h1>Ada Lovelace</h1>"));
    assert!(html.contains("<li>Rust</li>"));
    assert!(html.contains("<li>LaTeX</li>"));
    assert!(html.contains("mailto:ada@example.com"));
    assert!(!html.contains("{{"));

    let out = stdout(&output);
    assert!(out.starts_with("Portfolio Site Generator\n========================================\n"));
    assert!(out.contains("Loaded personal.yml"));
    assert!(out.contains("Successfully generated index.html"));
    assert!(out.contains("npm run build-css"));
}

#[test]
fn test_missing_contact_file_is_not_fatal() {
    let project = Project::with_full_data();
    std::fs::remove_file(project.path("data/contact.yml")).unwrap();
    project.write("index.tera", TEMPLATE);

    let output = project.run_site();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("contact.yml not found, skipping..."));
    assert!(out.contains("Missing data for: contact"));
    assert!(!project.read("index.html").contains("mailto:"));
}

#[test]
fn test_warns_when_asset_dir_missing() {
    let project = Project::with_full_data();
    project.write("index.tera", "static page");

    let output = project.run_site();
    assert!(output.status.success());
    assert!(stdout(&output).contains("dist directory not found"));

    std::fs::create_dir(project.path("dist")).unwrap();
    let output = project.run_site();
    assert!(output.status.success());
    assert!(!stdout(&output).contains("dist directory not found"));
}

#[test]
fn test_config_overrides_paths() {
    let project = Project::new();
    project.write("content/personal.yml", "name: Grace\n");
    project.write("site/page.tera", "Hello {{ personal.name }}");
    project.write(
        ".folio.toml",
        "data-dir = \"content\"\n\n[site]\ntemplate = \"site/page.tera\"\noutput = \"public.html\"\n",
    );

    let output = project.run_site();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(project.read("public.html"), "Hello Grace");
    assert!(!project.path("index.html").exists());
}

// =============================================================================
// Fatal conditions
// =============================================================================

#[test]
fn test_missing_template_exits_nonzero() {
    let project = Project::with_full_data();

    let output = project.run_site();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Template file index.tera not found"));
    assert!(!project.path("index.html").exists());
}

#[test]
fn test_missing_data_dir_exits_nonzero() {
    let project = Project::new();
    project.write("index.tera", TEMPLATE);

    let output = project.run_site();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Data directory data not found"));
    assert!(!project.path("index.html").exists());
}

#[test]
fn test_undefined_reference_reports_location() {
    let project = Project::with_full_data();
    project.write("index.tera", "<h1>{{ personal.name }}</h1>\n<p>{{ nonexistent.x }}</p>\n");

    let output = project.run_site();
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("Site generation failed"), "{err}");
    assert!(err.contains("File \"index.tera\", line 2"), "{err}");
    assert!(err.contains("{{ nonexistent.x }}"), "{err}");
    assert!(!project.path("index.html").exists());
}

#[test]
fn test_invalid_yaml_names_file() {
    let project = Project::with_full_data();
    project.write("data/skills.yml", "languages: [Rust\n");
    project.write("index.tera", TEMPLATE);

    let output = project.run_site();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("skills.yml"));
    assert!(!project.path("index.html").exists());
}

#[test]
fn test_malformed_config_exits_nonzero() {
    let project = Project::with_full_data();
    project.write("index.tera", TEMPLATE);
    project.write(".folio.toml", "data-dir = [\n");

    let output = project.run_site();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".folio.toml"));
}
