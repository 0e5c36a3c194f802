//! Java source-text escaping

/// Escape a decoded string for use inside a Java double-quoted literal
pub fn escape_java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        push_escaped(&mut out, c, '"');
    }
    out
}

/// Escape a decoded char for use inside a Java single-quoted literal
pub fn escape_java_char(c: char) -> String {
    let mut out = String::new();
    push_escaped(&mut out, c, '\'');
    out
}

fn push_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => out.push(c),
    }
}
