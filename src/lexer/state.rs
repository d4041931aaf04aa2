//! The state graph of the automaton.
//!
//! [`transition`] is a pure function of the current state and the character
//! under the cursor. It never touches the input itself: it describes what the
//! engine should do next through an [`Action`].
use super::{char_ext::CharExt, error::ErrorType, tokens::TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    Identifier,
    Integer,
    StringBody,
    StringEnd,
    Slash,
    LineComment,
    BlockComment,
    BlockCommentStar,
    Additive,
    Multiplicative,
    Relational,
    Less,
    Greater,
    Negation,
    Pipe,
    DoublePipe,
    Ampersand,
    DoubleAmpersand,
    Colon,
    Assign,
    OpenParen,
    CloseParen,
}

impl State {
    pub const ALL: [State; 23] = [
        State::Start,
        State::Identifier,
        State::Integer,
        State::StringBody,
        State::StringEnd,
        State::Slash,
        State::LineComment,
        State::BlockComment,
        State::BlockCommentStar,
        State::Additive,
        State::Multiplicative,
        State::Relational,
        State::Less,
        State::Greater,
        State::Negation,
        State::Pipe,
        State::DoublePipe,
        State::Ampersand,
        State::DoubleAmpersand,
        State::Colon,
        State::Assign,
        State::OpenParen,
        State::CloseParen,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append the current character to the lexeme, consume it, and move on.
    Advance(State),
    /// Consume the current character without recording it.
    Discard(State),
    /// Move on without consuming: the next state sees the same character.
    Goto(State),
    /// Finish the lexeme as a token. The current character is left in place.
    Emit(TokenKind),
    /// Consume the current character and drop the lexeme without a token.
    Restart,
    Fail(ErrorType),
}

/// Computes the action for `state` when looking at `ch`.
///
/// `lexeme` is the text accepted so far. Only the identifier state reads it,
/// to tell reserved words apart once the identifier is complete.
pub fn transition(state: State, ch: Option<char>, lexeme: &str) -> Action {
    use Action::*;

    match state {
        State::Start => start(ch),

        State::Identifier => {
            if ch.is_identifier_continuation() {
                Advance(State::Identifier)
            } else {
                Emit(TokenKind::keyword(lexeme).unwrap_or(TokenKind::Id))
            }
        }

        State::Integer => {
            if ch.is_digit() {
                Advance(State::Integer)
            } else if ch.is_identifier_continuation() {
                Fail(ErrorType::MalformedInteger)
            } else {
                Emit(TokenKind::IntVal)
            }
        }

        State::StringBody => {
            if ch.is_char('"') {
                Advance(State::StringEnd)
            } else if ch.is_linebreak() {
                Fail(ErrorType::NewlineInString)
            } else if ch.is_end_of_input() {
                Fail(ErrorType::UnterminatedString)
            } else {
                Advance(State::StringBody)
            }
        }
        State::StringEnd => Emit(TokenKind::StrVal),

        State::Slash => {
            if ch.is_char('/') {
                Discard(State::LineComment)
            } else if ch.is_char('*') {
                Discard(State::BlockComment)
            } else {
                Emit(TokenKind::Mul)
            }
        }
        State::LineComment => {
            if ch.is_linebreak() || ch.is_end_of_input() {
                Restart
            } else {
                Discard(State::LineComment)
            }
        }
        State::BlockComment => {
            if ch.is_char('*') {
                Discard(State::BlockCommentStar)
            } else if ch.is_end_of_input() {
                Fail(ErrorType::UnterminatedComment)
            } else {
                Discard(State::BlockComment)
            }
        }
        State::BlockCommentStar => {
            if ch.is_char('/') {
                Restart
            } else if ch.is_char('*') {
                Discard(State::BlockCommentStar)
            } else if ch.is_end_of_input() {
                Fail(ErrorType::UnterminatedComment)
            } else {
                Discard(State::BlockComment)
            }
        }

        State::Additive => Emit(TokenKind::Sum),
        State::Multiplicative => Emit(TokenKind::Mul),
        State::Relational => Emit(TokenKind::Rel),
        State::Less => {
            if ch.is_char('=') || ch.is_char('>') {
                Advance(State::Relational)
            } else {
                Emit(TokenKind::Rel)
            }
        }
        State::Greater => {
            if ch.is_char('=') {
                Advance(State::Relational)
            } else {
                Emit(TokenKind::Rel)
            }
        }
        State::Negation => Emit(TokenKind::Neg),

        State::Pipe => {
            if ch.is_char('|') {
                Advance(State::DoublePipe)
            } else {
                Fail(ErrorType::IncompleteOperator { expected: '|' })
            }
        }
        State::DoublePipe => Emit(TokenKind::Or),
        State::Ampersand => {
            if ch.is_char('&') {
                Advance(State::DoubleAmpersand)
            } else {
                Fail(ErrorType::IncompleteOperator { expected: '&' })
            }
        }
        State::DoubleAmpersand => Emit(TokenKind::And),

        State::Colon => {
            if ch.is_char('=') {
                Advance(State::Assign)
            } else {
                Fail(ErrorType::IncompleteOperator { expected: '=' })
            }
        }
        State::Assign => {
            if ch.is_identifier_continuation() {
                Fail(ErrorType::MalformedAssignment)
            } else {
                Emit(TokenKind::Asign)
            }
        }

        State::OpenParen => Emit(TokenKind::IPar),
        State::CloseParen => Emit(TokenKind::DPar),
    }
}

fn start(ch: Option<char>) -> Action {
    use Action::*;

    // Digits and letters are re-examined by the state that scans them.
    if ch.is_digit() {
        return Goto(State::Integer);
    }
    if ch.is_identifier_start() {
        return Goto(State::Identifier);
    }
    if ch.is_space() {
        return Restart;
    }

    let next = match ch {
        None => return Emit(TokenKind::Eof),
        Some('"') => State::StringBody,
        Some(':') => State::Colon,
        Some('+' | '-') => State::Additive,
        Some('*') => State::Multiplicative,
        Some('/') => State::Slash,
        Some('=') => State::Relational,
        Some('<') => State::Less,
        Some('>') => State::Greater,
        Some('!') => State::Negation,
        Some('|') => State::Pipe,
        Some('&') => State::Ampersand,
        Some('(') => State::OpenParen,
        Some(')') => State::CloseParen,
        Some(other) => return Fail(ErrorType::UnknownCharacter(other)),
    };
    Advance(next)
}
