//! Runtime template rendering for the site and resume templates.
//!
//! Uses Tera. Each data category is a top-level template variable, and every
//! failure carries a [`RenderTrace`] pointing at the template line involved.

mod engine;
mod filters;
mod trace;

pub use engine::{RenderError, TemplateRenderer};
pub use trace::{EnclosingBlock, RenderTrace};
