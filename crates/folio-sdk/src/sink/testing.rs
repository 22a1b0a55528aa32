//! Shell-script stand-in for `pdflatex`, for compiler and PDF sink tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "pdfTeX 3.141592653-2.6-1.40.25 (fake)"
  exit @VERSION_EXIT@
fi
outdir="."
while [ $# -gt 0 ]; do
  case "$1" in
    -output-directory) outdir="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "$outdir" >> "@RECORD@"
echo "This is pdfTeX, Version 3.141592653 (fake)"
echo "LaTeX Warning: Reference 'sec:intro' undefined" >&2
sleep @SLEEP@
if [ "@PRODUCE@" = "yes" ]; then
  printf '%%PDF-1.5 fake' > "$outdir/resume.pdf"
fi
exit @EXIT@
"#;

/// Behaviour of the generated compiler script.
#[derive(Debug, Clone)]
pub(crate) struct FakeCompiler {
    pub exit_code: i32,
    pub version_exit_code: i32,
    pub produce_pdf: bool,
    pub sleep_secs: u32,
}

impl Default for FakeCompiler {
    fn default() -> Self {
        Self {
            exit_code: 0,
            version_exit_code: 0,
            produce_pdf: true,
            sleep_secs: 0,
        }
    }
}

impl FakeCompiler {
    /// Write the script into `dir` and return its path.
    pub fn install(&self, dir: &Path) -> PathBuf {
        let path = dir.join("fake-pdflatex");
        let script = SCRIPT
            .replace("@VERSION_EXIT@", &self.version_exit_code.to_string())
            .replace("@EXIT@", &self.exit_code.to_string())
            .replace("@SLEEP@", &self.sleep_secs.to_string())
            .replace("@PRODUCE@", if self.produce_pdf { "yes" } else { "no" })
            .replace("@RECORD@", &Self::record_path(dir).display().to_string());
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// File the script appends each `-output-directory` to.
    pub fn record_path(dir: &Path) -> PathBuf {
        dir.join("output-dirs.txt")
    }

    pub fn recorded_dirs(dir: &Path) -> Vec<PathBuf> {
        fs::read_to_string(Self::record_path(dir))
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }
}
