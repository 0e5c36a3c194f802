//! Domain models for message templates

use crate::shared::models::Expression;
use crate::shared::text::escape_java_string;
use serde::{Deserialize, Serialize};

/// Placeholder marker understood by the target logging APIs
pub const MARKER: &str = "{}";

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Decoded literal text
    Text(String),
    Placeholder,
}

/// Template string plus the arguments that fill its markers
///
/// `template` is rendered from `segments`; `placeholder_args` are in
/// left-to-right source order, one per emitted marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResult {
    pub segments: Vec<Segment>,
    pub template: String,
    pub placeholder_args: Vec<Expression>,
    pub trailing_exception: Option<Expression>,
}

impl TemplateResult {
    pub fn new(segments: Vec<Segment>, placeholder_args: Vec<Expression>) -> Self {
        let template = segments
            .iter()
            .map(|s| match s {
                Segment::Text(text) => text.as_str(),
                Segment::Placeholder => MARKER,
            })
            .collect();
        Self {
            segments,
            template,
            placeholder_args,
            trailing_exception: None,
        }
    }

    pub fn with_trailing_exception(mut self, exception: Option<Expression>) -> Self {
        self.trailing_exception = exception;
        self
    }

    /// Markers in the rendered template, including any that were already
    /// present in literal text
    pub fn marker_count(&self) -> usize {
        count_markers(&self.template)
    }

    /// Emitted markers line up with the placeholder arguments
    pub fn is_consistent(&self) -> bool {
        self.marker_count() == self.placeholder_args.len()
    }

    /// The template as a string literal expression
    pub fn template_literal(&self) -> Expression {
        Expression::string_lit(self.template.clone())
    }

    /// Java source of the template literal
    pub fn source_literal(&self) -> String {
        format!("\"{}\"", escape_java_string(&self.template))
    }
}

/// Code handed to the engine's template-instantiation primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTemplate {
    pub code: String,
    /// Values for the parameter slots, in slot order
    pub parameters: Vec<Expression>,
}

/// Count non-overlapping `{}` occurrences
pub fn count_markers(text: &str) -> usize {
    text.matches(MARKER).count()
}
