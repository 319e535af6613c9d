//! Small string utilities used across the detection pipeline.

/// True for the characters that terminate a source line.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Whether the text contains a line break anywhere.
pub fn contains_line_break(s: &str) -> bool {
    s.bytes().any(|b| b == b'\n' || b == b'\r')
}

/// Strip leading and trailing line breaks, leaving interior ones and any
/// other surrounding whitespace untouched.
pub fn strip_enclosing_line_breaks(s: &str) -> &str {
    s.trim_matches(|c| is_line_break(c))
}
