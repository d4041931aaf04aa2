use std::{iter::Peekable, str::Chars};

use crate::span::{Bytes, Location};

/// Abstraction over a peekable char iterator with position information.
///
/// Tracks the byte offset of the next character as well as its line and
/// column. A `\r\n` pair counts as a single line break.
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
    location: Location,
    previous: Option<char>,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
            location: Location::default(),
            previous: None,
        }
    }

    /// Returns the character under the cursor without consuming it.
    /// Returns [`None`] at the end of the input.
    pub fn current(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Moves the cursor forward by one character, returning the character
    /// that was consumed. Does nothing at the end of the input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.byte_position += ch.len_utf8();

        match ch {
            '\n' if self.previous == Some('\r') => {}
            '\n' | '\r' => {
                self.location.line += 1;
                self.location.column = 1;
            }
            _ => self.location.column += 1,
        }
        self.previous = Some(ch);

        Some(ch)
    }

    /// Retrieves the byte position of the cursor.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Retrieves the line and column of the cursor.
    pub fn location(&self) -> Location {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_bytes_and_columns() {
        let mut chars = CharLexer::new("añb");

        assert_eq!(chars.advance(), Some('a'));
        assert_eq!(chars.advance(), Some('ñ'));

        assert_eq!(chars.byte_position(), Bytes::new(3));
        assert_eq!(chars.location(), Location::new(1, 3));
        assert_eq!(chars.current(), Some('b'));
    }

    #[test]
    fn crlf_is_a_single_line_break() {
        let mut chars = CharLexer::new("a\r\nb\rc\nd");
        let mut lines = vec![];
        while let Some(ch) = chars.current() {
            if ch.is_alphabetic() {
                lines.push((ch, chars.location()));
            }
            chars.advance();
        }

        assert_eq!(
            lines,
            vec![
                ('a', Location::new(1, 1)),
                ('b', Location::new(2, 1)),
                ('c', Location::new(3, 1)),
                ('d', Location::new(4, 1)),
            ]
        );
    }

    #[test]
    fn advance_at_end_is_a_no_op() {
        let mut chars = CharLexer::new("");

        assert_eq!(chars.current(), None);
        assert_eq!(chars.advance(), None);
        assert_eq!(chars.byte_position(), Bytes::new(0));
    }
}
