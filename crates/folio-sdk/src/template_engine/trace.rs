//! Locate template failures in the template source.
//!
//! Tera reports parse errors with a `--> line:col` marker but reports runtime
//! errors (undefined variables, bad filter input) only by message. For the
//! latter the offending expression is looked up in the source text, so the
//! operator gets a file/line/enclosing-block trace either way.

use std::error::Error as _;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// A block tag (`for`, `if`, ...) that is still open at the failing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingBlock {
    /// Tag keyword, e.g. `for`.
    pub keyword: String,
    /// Tag body, e.g. `for job in experience.jobs`.
    pub header: String,
    /// 1-based line of the opening tag.
    pub line: usize,
}

/// Where and why a template failed.
#[derive(Debug, Clone)]
pub struct RenderTrace {
    /// Template name (the path it was loaded from).
    pub template: String,
    /// 1-based line, when it could be determined.
    pub line: Option<usize>,
    /// 1-based column, parse errors only.
    pub column: Option<usize>,
    /// Text of the failing line.
    pub source_line: Option<String>,
    pub enclosing: Option<EnclosingBlock>,
    /// Error messages from outermost to innermost.
    pub causes: Vec<String>,
}

impl RenderTrace {
    pub(crate) fn from_tera(template: &str, source: &str, err: &tera::Error) -> Self {
        let causes = error_chain(err);

        let (line, column) = match causes.iter().find_map(|c| parse_marker(c)) {
            Some((line, column)) => (Some(line), Some(column)),
            None => (causes.iter().rev().find_map(|c| locate(source, c)), None),
        };

        let source_line = line
            .and_then(|l| source.lines().nth(l.checked_sub(1)?))
            .map(|s| s.trim_end().to_string());
        let enclosing = line.and_then(|l| enclosing_block(source, l));

        Self {
            template: template.to_string(),
            line,
            column,
            source_line,
            enclosing,
            causes,
        }
    }

    /// The innermost, most specific error message.
    pub fn message(&self) -> &str {
        self.causes.last().map(String::as_str).unwrap_or("unknown error")
    }

    /// One line describing the failure. Parse messages carry a multi-line
    /// pest excerpt; its `= expected ...` line is the useful part.
    pub fn summary(&self) -> &str {
        let message = self.message();
        let lines = || message.lines().map(str::trim).filter(|l| !l.is_empty());
        lines()
            .find_map(|l| l.strip_prefix("= "))
            .or_else(|| lines().find(|l| !l.starts_with("-->")))
            .unwrap_or("unknown error")
    }

    /// Traceback-style frame header: `File "index.tera", line 12, in for job in ...`.
    pub fn frame(&self) -> String {
        let mut frame = format!("File \"{}\"", self.template);
        if let Some(line) = self.line {
            frame.push_str(&format!(", line {line}"));
        }
        match &self.enclosing {
            Some(block) => frame.push_str(&format!(", in {}", block.header)),
            None => frame.push_str(", in <template>"),
        }
        frame
    }
}

impl fmt::Display for RenderTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.template)?;
        if let Some(line) = self.line {
            write!(f, " line {line}")?;
        }
        write!(f, ": {}", self.summary())
    }
}

fn error_chain(err: &tera::Error) -> Vec<String> {
    let mut causes = vec![err.to_string()];
    let mut current = err.source();
    while let Some(e) = current {
        causes.push(e.to_string());
        current = e.source();
    }
    causes
}

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-->\s*(\d+):(\d+)").expect("static regex"))
}

fn quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("static regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{%-?\s*(\w+)([^%]*?)\s*-?%\}").expect("static regex"))
}

fn call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(Filter|Function) call '([^']+)'").expect("static regex"))
}

fn span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\{\{-?(.*?)-?\}\}|\{%-?\s*(\w+)(.*?)-?%\}").expect("static regex")
    })
}

fn parse_marker(message: &str) -> Option<(usize, usize)> {
    let caps = marker_regex().captures(message)?;
    let line = caps[1].parse().ok()?;
    let column = caps[2].parse().ok()?;
    Some((line, column))
}

/// What a runtime error message points at in the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Needle {
    Variable(String),
    Filter(String),
    Function(String),
}

fn needles(message: &str) -> Vec<Needle> {
    if let Some(expr) = quoted_regex().captures(message).and_then(|c| c.get(1)) {
        let expr = expr.as_str().trim();
        if expr.is_empty() {
            return Vec::new();
        }
        let mut out = vec![Needle::Variable(expr.to_string())];
        // `a.b.c` may be spelled `a["b"].c` or `a['b'].c` in the source
        if let Some(last) = expr.rsplit('.').next() {
            if last != expr {
                out.push(Needle::Variable(last.to_string()));
            }
        }
        return out;
    }

    match call_regex().captures(message) {
        Some(caps) if &caps[1] == "Filter" => vec![Needle::Filter(caps[2].to_string())],
        Some(caps) => vec![Needle::Function(caps[2].to_string())],
        None => Vec::new(),
    }
}

/// Find the line `message` most likely failed on.
fn locate(source: &str, message: &str) -> Option<usize> {
    needles(message)
        .iter()
        .find_map(|needle| find_needle(source, needle))
}

/// Scan evaluated spans (`{{ ... }}` and tag bodies) in order. `if`/`elif`
/// conditions are skipped, since Tera treats an undefined name there as
/// false, and so are output spans guarded by a condition on the same name.
fn find_needle(source: &str, needle: &Needle) -> Option<usize> {
    let call = match needle {
        Needle::Variable(_) => None,
        Needle::Filter(name) => Regex::new(&format!(r"\|\s*{}\b", regex::escape(name))).ok(),
        Needle::Function(name) => Regex::new(&format!(r"\b{}\s*\(", regex::escape(name))).ok(),
    };
    let find = |body: &str| match (needle, &call) {
        (Needle::Variable(name), _) => find_word(body, name),
        (_, Some(re)) => re.find(body).map(|m| m.start()),
        (_, None) => None,
    };

    // one entry per open block; `Some(condition)` while inside an if/elif branch
    let mut guards: Vec<Option<&str>> = Vec::new();
    for caps in span_regex().captures_iter(source) {
        let (body, keyword) = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(expr), _, _) => (expr, None),
            (None, Some(keyword), Some(rest)) => (rest, Some(keyword.as_str())),
            _ => continue,
        };

        match keyword {
            Some("if") => {
                guards.push(Some(body.as_str()));
                continue;
            }
            Some("elif") => {
                if let Some(top) = guards.last_mut() {
                    *top = Some(body.as_str());
                }
                continue;
            }
            Some("else") => {
                if let Some(top) = guards.last_mut() {
                    *top = None;
                }
                continue;
            }
            Some(kw) if kw.starts_with("end") => {
                guards.pop();
                continue;
            }
            _ => {}
        }

        let guarded = match needle {
            Needle::Variable(name) => guards
                .iter()
                .flatten()
                .any(|cond| find_word(cond, name).is_some()),
            _ => false,
        };
        if !guarded {
            if let Some(pos) = find(body.as_str()) {
                let offset = body.start() + pos;
                return Some(source[..offset].matches('\n').count() + 1);
            }
        }

        if matches!(keyword, Some("for" | "block" | "macro" | "filter" | "raw")) {
            guards.push(None);
        }
    }
    None
}

/// Byte offset of `needle` in `text`, not embedded in a longer identifier.
fn find_word(text: &str, needle: &str) -> Option<usize> {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    text.match_indices(needle)
        .find(|(start, _)| {
            let before = text[..*start].chars().next_back();
            let after = text[start + needle.len()..].chars().next();
            !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
        })
        .map(|(start, _)| start)
}

/// The innermost block tag opened before `line` and not yet closed.
fn enclosing_block(source: &str, line: usize) -> Option<EnclosingBlock> {
    let prefix_end = if line <= 1 {
        0
    } else {
        source
            .match_indices('\n')
            .nth(line - 2)
            .map(|(idx, _)| idx)
            .unwrap_or(source.len())
    };
    let prefix = &source[..prefix_end];

    let mut stack: Vec<EnclosingBlock> = Vec::new();
    for caps in tag_regex().captures_iter(prefix) {
        let keyword = &caps[1];
        match keyword {
            "for" | "if" | "block" | "macro" | "filter" => {
                let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
                stack.push(EnclosingBlock {
                    keyword: keyword.to_string(),
                    header: format!("{keyword}{}", caps[2].trim_end()),
                    line: prefix[..offset].matches('\n').count() + 1,
                });
            }
            kw if kw.starts_with("end") => {
                stack.pop();
            }
            _ => {}
        }
    }
    stack.pop()
}
