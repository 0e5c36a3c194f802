//! Infrastructure layer for message templates

mod compiler;
pub mod escape;
pub mod format_string;
pub mod to_string;

pub use compiler::ConcatenationCompiler;
pub use escape::{escape_template_text, DEFAULT_INTRODUCER};
pub use format_string::{convert_format, match_format_call};
pub use to_string::strip_to_string;
