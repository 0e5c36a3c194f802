//! `String.format(..)` messages to placeholder templates
//!
//! `log.info(String.format("took %d ms for %s", ms, name))` becomes
//! `log.info("took {} ms for {}", ms, name)`. Formats using argument indexes,
//! unsupported flags, or already containing `{}` are left alone.

use crate::features::concatenation::domain::{Segment, TemplateResult, MARKER};
use crate::shared::models::{Expression, STRING_FQN};
use once_cell::sync::Lazy;
use regex::Regex;

static SPECIFIER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"%[\d.]*[dfscbBhHn%]").ok());
static INDEXED_SPECIFIER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"%\d+\$").ok());

/// Format literal and arguments of a `String.format(literal, args...)` call
pub fn match_format_call(expr: &Expression) -> Option<(&str, &[Expression])> {
    let call = expr.as_method_call()?;
    if call.name != "format" || !call.is_static || !call.is_declared_by(STRING_FQN) {
        return None;
    }
    let (format, args) = call.args.split_first()?;
    Some((format.as_string_literal()?, args))
}

/// Convert a format string, consuming `args` in order
pub fn convert_format(format: &str, args: &[Expression]) -> Option<TemplateResult> {
    let specifier = SPECIFIER.as_ref()?;
    let indexed = INDEXED_SPECIFIER.as_ref()?;
    if indexed.is_match(format) || format.contains(MARKER) {
        return None;
    }

    let mut segments = Vec::new();
    let mut placeholders = 0;
    let mut last = 0;
    for m in specifier.find_iter(format) {
        push_text(&mut segments, &format[last..m.start()])?;
        match m.as_str() {
            "%%" => push_literal(&mut segments, "%"),
            "%n" => push_literal(&mut segments, "\n"),
            _ => {
                segments.push(Segment::Placeholder);
                placeholders += 1;
            }
        }
        last = m.end();
    }
    push_text(&mut segments, &format[last..])?;

    if placeholders != args.len() {
        return None;
    }
    Some(TemplateResult::new(segments, args.to_vec()))
}

/// Text between specifiers; a stray `%` means an unsupported specifier
fn push_text(segments: &mut Vec<Segment>, text: &str) -> Option<()> {
    if text.contains('%') {
        return None;
    }
    push_literal(segments, text);
    Some(())
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(Segment::Text(previous)) => previous.push_str(text),
        _ => segments.push(Segment::Text(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::TypeDescriptor;

    fn args(n: usize) -> Vec<Expression> {
        (0..n)
            .map(|i| Expression::ident(format!("a{}", i), TypeDescriptor::Unknown))
            .collect()
    }

    #[test]
    fn test_convert_simple_format() {
        let result = convert_format("took %d ms for %s", &args(2)).unwrap();
        assert_eq!(result.template, "took {} ms for {}");
        assert_eq!(result.placeholder_args, args(2));
    }

    #[test]
    fn test_precision_and_literal_percent() {
        let result = convert_format("ratio %.2f%% done%n", &args(1)).unwrap();
        assert_eq!(result.template, "ratio {}% done\n");
    }

    #[test]
    fn test_rejected_formats() {
        assert!(convert_format("%1$s and %1$s", &args(1)).is_none());
        assert!(convert_format("mixed {} and %s", &args(1)).is_none());
        assert!(convert_format("%s %s", &args(1)).is_none());
        assert!(convert_format("left %-5s", &args(1)).is_none());
    }

    #[test]
    fn test_match_format_call() {
        let call = Expression::static_call(
            STRING_FQN,
            "format",
            vec![Expression::string_lit("%s"), Expression::int_lit(1)],
            TypeDescriptor::string(),
        );
        let (format, rest) = match_format_call(&call).unwrap();
        assert_eq!(format, "%s");
        assert_eq!(rest.len(), 1);

        let dynamic = Expression::static_call(
            STRING_FQN,
            "format",
            vec![Expression::ident("fmt", TypeDescriptor::string())],
            TypeDescriptor::string(),
        );
        assert!(match_format_call(&dynamic).is_none());
    }
}
