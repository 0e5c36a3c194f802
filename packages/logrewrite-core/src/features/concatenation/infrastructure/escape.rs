//! Host-template rendering
//!
//! The engine instantiates replacement code from a template in which
//! `<introducer>{...}` opens a parameter slot. Literal text therefore has the
//! introducer escaped on top of regular Java string escaping, so that
//! `"See link #" + text` cannot turn into a slot.

use crate::features::concatenation::domain::{HostTemplate, Segment, TemplateResult, MARKER};
use crate::shared::text::escape_java_string;

pub const DEFAULT_INTRODUCER: char = '#';

/// Escape decoded literal text for the host template
pub fn escape_template_text(text: &str, introducer: char) -> String {
    let escaped = escape_java_string(text);
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if c == introducer {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Parameter slot for one argument
pub fn parameter_slot(introducer: char) -> String {
    format!("{}{{any()}}", introducer)
}

impl TemplateResult {
    /// `"msg {}", #{any()}` with one slot per placeholder argument
    pub fn host_template(&self, introducer: char) -> HostTemplate {
        let mut literal = String::from("\"");
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => literal.push_str(&escape_template_text(text, introducer)),
                Segment::Placeholder => literal.push_str(MARKER),
            }
        }
        literal.push('"');

        let slot = parameter_slot(introducer);
        let mut code = literal;
        for _ in &self.placeholder_args {
            code.push_str(", ");
            code.push_str(&slot);
        }
        if self.trailing_exception.is_some() {
            code.push_str(", ");
            code.push_str(&slot);
        }

        let parameters = self
            .placeholder_args
            .iter()
            .chain(self.trailing_exception.iter())
            .cloned()
            .collect();
        HostTemplate { code, parameters }
    }
}
