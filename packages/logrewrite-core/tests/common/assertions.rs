//! Custom assertions

use logrewrite_core::pipeline::ProcessResult;
use logrewrite_core::shared::models::{render_block, Statement};
use logrewrite_core::TemplateResult;

pub fn assert_no_warnings(result: &ProcessResult) {
    assert!(
        result.warnings.is_empty(),
        "Expected no warnings, got: {:?}",
        result.warnings
    );
}

/// Compare blocks through their rendered Java, for readable diffs
pub fn assert_renders(actual: &[Statement], expected: &str) {
    pretty_assertions::assert_eq!(render_block(actual).trim_end(), expected.trim_end());
}

pub fn assert_consistent(result: &TemplateResult) {
    assert!(
        result.is_consistent(),
        "template {:?} has {} markers for {} arguments",
        result.template,
        result.marker_count(),
        result.placeholder_args.len()
    );
}
