//! Console rendering of stage output.
//!
//! Stage text is displayed as block-quoted markdown: bullet glyphs are
//! normalized into list markers and every line (including empty ones) gets a
//! `> ` prefix.

use std::io::{self, Write};

/// Horizontal rule printed after each section body.
const RULE: &str = "--------------------------------------------------------------";

/// Convert stage output to console markdown.
///
/// `•` becomes a two-space-indented `*` list item, then every line is
/// prefixed with `> `. Lines keep their own terminators, so input without a
/// trailing newline renders without one.
pub fn to_markdown(text: &str) -> String {
    let text = text.replace('•', "  *");
    let mut out = String::with_capacity(text.len() + text.lines().count() * 2);
    let mut rest = text.as_str();
    while !rest.is_empty() {
        let (line, tail) = match rest.find('\n') {
            Some(i) => rest.split_at(i + 1),
            None => (rest, ""),
        };
        out.push_str("> ");
        out.push_str(line);
        rest = tail;
    }
    out
}

/// Write one labeled section: header, block-quoted body, horizontal rule.
pub fn write_section(output: &mut impl Write, header: &str, body: &str) -> io::Result<()> {
    writeln!(output, "\n--- {} ---\n", header)?;

    let rendered = to_markdown(body);
    output.write_all(rendered.as_bytes())?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        writeln!(output)?;
    }

    writeln!(output, "{}", RULE)
}
