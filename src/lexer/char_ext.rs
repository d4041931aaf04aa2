//! Character classification for the automaton.
//!
//! Every predicate is defined over `Option<char>`, where [`None`] stands for
//! the end of the input. Only [`CharExt::is_end_of_input`] holds for it.
pub trait CharExt {
    fn is_digit(&self) -> bool;

    fn is_identifier_start(&self) -> bool;

    fn is_identifier_continuation(&self) -> bool;

    fn is_space(&self) -> bool;

    fn is_linebreak(&self) -> bool;

    fn is_end_of_input(&self) -> bool;

    fn is_char(&self, expected: char) -> bool;
}
impl CharExt for Option<char> {
    fn is_digit(&self) -> bool {
        matches!(self, Some(ch) if ch.is_ascii_digit())
    }

    fn is_identifier_start(&self) -> bool {
        matches!(self, Some(ch) if ch.is_alphabetic())
    }

    fn is_identifier_continuation(&self) -> bool {
        self.is_identifier_start() || self.is_digit()
    }

    fn is_space(&self) -> bool {
        matches!(self, Some(ch) if ch.is_whitespace())
    }

    fn is_linebreak(&self) -> bool {
        matches!(self, Some('\n' | '\r'))
    }

    fn is_end_of_input(&self) -> bool {
        self.is_none()
    }

    fn is_char(&self, expected: char) -> bool {
        *self == Some(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_is_only_end_of_input() {
        let eof: Option<char> = None;

        assert!(eof.is_end_of_input());
        assert!(!eof.is_digit());
        assert!(!eof.is_identifier_start());
        assert!(!eof.is_identifier_continuation());
        assert!(!eof.is_space());
        assert!(!eof.is_linebreak());
        assert!(!eof.is_char('\0'));
    }

    #[test]
    fn digits_continue_but_do_not_start_identifiers() {
        assert!(Some('7').is_digit());
        assert!(Some('7').is_identifier_continuation());
        assert!(!Some('7').is_identifier_start());
    }

    #[test]
    fn letters_start_identifiers() {
        for ch in ['a', 'Z', 'ñ', 'é'] {
            assert!(Some(ch).is_identifier_start(), "{ch:?}");
            assert!(Some(ch).is_identifier_continuation(), "{ch:?}");
        }
    }

    #[test]
    fn underscore_is_not_an_identifier_character() {
        assert!(!Some('_').is_identifier_start());
        assert!(!Some('_').is_identifier_continuation());
    }

    #[test]
    fn linebreaks_are_whitespace() {
        for ch in ['\n', '\r'] {
            assert!(Some(ch).is_linebreak());
            assert!(Some(ch).is_space());
        }
        assert!(Some('\t').is_space());
        assert!(!Some('\t').is_linebreak());
    }
}
