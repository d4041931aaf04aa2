//! Functionality for looking up source lines, used when rendering diagnostics.
use std::fmt::Write;

use crate::{
    error::PositionalError,
    span::{Bytes, Span},
};

/// Finds the line containing `target_position`. A position at or past the
/// end of the source maps to the last line.
pub fn find_line(source: &str, target_position: Bytes) -> LineContext<'_> {
    let lines = inclusive_split_lines(source);
    let last = lines.len() - 1;

    let mut position = Bytes::new(0);
    for (line_idx, line) in lines.into_iter().enumerate() {
        let end_position = position + line.len();
        if target_position < end_position || line_idx == last {
            return LineContext {
                source: line,
                range: Span::new(position, end_position),
                line_no: line_idx + 1,
            };
        }
        position = end_position;
    }

    unreachable!("inclusive_split_lines always yields at least one line")
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut char_enum = source.chars().peekable();

    while let Some(ch) = char_enum.next() {
        position += ch.len_utf8();

        // If we find an \r followed by an \n, delay recognising the line until the next iteration.
        if ch == '\n' || (ch == '\r' && char_enum.peek() != Some(&'\n')) {
            seen_lines.push(&source[start..position]);
            start = position;
        }
    }
    seen_lines.push(&source[start..position]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn range(&self) -> Span {
        self.range
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Renders an error underneath the line it occurred on:
///
/// ```text
/// 2| x := 12ab
///  |      ^^^--- Integer literal may not be followed by a letter
/// ```
pub fn describe_error<E: PositionalError>(err: &E, source: &str) -> String {
    let range = err.range();
    let line = find_line(source, range.start());

    let display = line.for_display();
    let line_start: usize = line.range().start().into();
    let start: usize = range.start().into();
    let end = start + usize::from(err.length());

    // Tabs are kept so the carets line up with the displayed source.
    let padding: String = source[line_start..start]
        .chars()
        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
        .collect();
    let visible_end = (line_start + display.len()).max(start);
    let underlined = source[start..end.min(visible_end)].chars().count().max(1);

    let gutter = err.location().line.to_string();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}| {}", gutter, display);
    let _ = write!(
        out,
        "{}| {}{}--- {}",
        " ".repeat(gutter.len()),
        padding,
        "^".repeat(underlined),
        err.describe()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    pub fn find_line_first_character_of_empty_line() {
        let context = find_line("", Bytes::new(0));

        assert_eq!(context.line_no, 1);
        assert_eq!(context.range, Span::new(Bytes::new(0), Bytes::new(0)));
        assert_eq!(context.source, "");
    }

    #[test]
    pub fn find_line_first_character_of_next_line() {
        let context = find_line("abc\ndef", Bytes::new(5));

        assert_eq!(context.line_no, 2);
        assert_eq!(context.range, Span::new(Bytes::new(4), Bytes::new(7)));
        assert_eq!(context.source, "def");
    }

    #[test]
    pub fn find_line_end_of_input_maps_to_last_line() {
        let context = find_line("abc\ndef", Bytes::new(7));

        assert_eq!(context.line_no, 2);
    }

    #[test]
    pub fn inclusive_split_lines_mixed_endings() {
        let lines = inclusive_split_lines("abc\r\nd\r\n\ne\rf");

        assert_eq!(vec!["abc\r\n", "d\r\n", "\n", "e\r", "f"], lines)
    }

    #[test]
    pub fn describe_error_underlines_offending_range() {
        let source = "si\nx := 12ab";
        let errors = lex(source).expect_err("Expected lexer errors");

        assert_eq!(
            describe_error(&errors[0], source),
            "2| x := 12ab\n \
              |      ^^^--- Integer literal may not be followed by a letter"
        );
    }

    #[test]
    pub fn describe_error_keeps_tab_indentation() {
        let source = "\t\t\"ü";
        let errors = lex(source).expect_err("Expected lexer errors");

        assert_eq!(
            describe_error(&errors[0], source),
            "1| \t\t\"ü\n \
              | \t\t^^--- Unterminated string literal"
        );
    }

    #[test]
    pub fn describe_error_at_end_of_input() {
        let source = "/* abierto";
        let errors = lex(source).expect_err("Expected lexer errors");

        assert_eq!(
            describe_error(&errors[0], source),
            "1| /* abierto\n \
              | ^^^^^^^^^^--- Unterminated multi-line comment"
        );
    }
}
