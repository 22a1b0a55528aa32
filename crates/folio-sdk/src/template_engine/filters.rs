//! Custom Tera filters for site and resume templates.

use std::collections::HashMap;

use heck::ToKebabCase;
use tera::{Result, Value};

/// Escape LaTeX special characters so data can be dropped into resume source.
///
/// Numbers and booleans are stringified first, so `{{ job.years | latex_escape }}`
/// works on unquoted YAML scalars.
pub(crate) fn latex_escape(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => {
            return Err(tera::Error::msg(
                "latex_escape filter expects a string, number or boolean",
            ))
        }
    };
    Ok(Value::String(escape_latex(&s)))
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("kebab_case filter expects a string"))?;
    Ok(Value::String(s.to_kebab_case()))
}

fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
