//! Shared fixtures for driving the generator binaries in scratch projects.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const PERSONAL: &str = "name: \"Ada Lovelace\"\ntitle: Analyst\n";
pub const SKILLS: &str = "languages:\n  - Rust\n  - LaTeX\n";
pub const EXPERIENCE: &str = "jobs:\n  - company: Engine Works\n    role: Programmer\n";
pub const PROJECTS: &str = "items:\n  - name: Difference Engine\n";
pub const CONTACT: &str = "email: ada@example.com\n";

/// A temp working directory laid out like a folio project.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A project with all five data files.
    pub fn with_full_data() -> Self {
        let project = Self::new();
        project.write("data/personal.yml", PERSONAL);
        project.write("data/skills.yml", SKILLS);
        project.write("data/experience.yml", EXPERIENCE);
        project.write("data/projects.yml", PROJECTS);
        project.write("data/contact.yml", CONTACT);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Empty directory used as `TMPDIR` for the child process.
    pub fn scratch_tmp(&self) -> PathBuf {
        let tmp = self.path("tmp");
        fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    pub fn run_site(&self) -> Output {
        self.run(PathBuf::from(env!("CARGO_BIN_EXE_generate-site")))
    }

    pub fn run_resume(&self) -> Output {
        self.run(PathBuf::from(env!("CARGO_BIN_EXE_generate-resume")))
    }

    fn run(&self, bin: PathBuf) -> Output {
        Command::new(bin)
            .current_dir(self.root())
            .env("TMPDIR", self.scratch_tmp())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute generator binary")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Install a shell script standing in for `pdflatex` and point the project's
/// `.folio.toml` at it.
#[cfg(unix)]
pub fn install_fake_compiler(project: &Project, exit_code: i32, produce_pdf: bool) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "pdfTeX 3.141592653-2.6-1.40.25 (fake)"
  exit 0
fi
outdir="."
while [ $# -gt 0 ]; do
  case "$1" in
    -output-directory) outdir="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "This is pdfTeX, Version 3.141592653 (fake)"
echo "! Undefined control sequence." >&2
if [ "{produce}" = "yes" ]; then
  printf '%%PDF-1.5 fake' > "$outdir/resume.pdf"
fi
exit {exit_code}
"#,
        produce = if produce_pdf { "yes" } else { "no" },
    );

    let bin_dir = project.path("bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let path = bin_dir.join("fake-pdflatex");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    use_compiler(project, &path.display().to_string());
    path
}

pub fn use_compiler(project: &Project, program: &str) {
    project.write(
        ".folio.toml",
        &format!("[resume]\ncompiler = \"{program}\"\n"),
    );
}
