//! Errors produced when the automaton rejects its input.
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, span::*};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorType {
    #[error("Integer literal may not be followed by a letter")]
    MalformedInteger,
    #[error("Assignment operator may not be followed by an identifier character")]
    MalformedAssignment,
    #[error("String literal may not span multiple lines")]
    NewlineInString,
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated multi-line comment")]
    UnterminatedComment,
    #[error("Incomplete operator, expected '{expected}'")]
    IncompleteOperator { expected: char },
    #[error("Unknown character {0:?}")]
    UnknownCharacter(char),
}

impl ErrorType {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorType::MalformedInteger | ErrorType::MalformedAssignment => {
                ErrorCategory::MalformedLiteral
            }
            ErrorType::NewlineInString
            | ErrorType::UnterminatedString
            | ErrorType::UnterminatedComment => ErrorCategory::Unterminated,
            ErrorType::IncompleteOperator { .. } => ErrorCategory::InvalidOperator,
            ErrorType::UnknownCharacter(_) => ErrorCategory::UnknownCharacter,
        }
    }
}

/// Coarse grouping of [`ErrorType`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MalformedLiteral,
    Unterminated,
    InvalidOperator,
    UnknownCharacter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// From the start of the rejected lexeme up to and including the
    /// offending character.
    pub range: Span,
    /// Where the rejected lexeme starts.
    pub location: Location,
    /// Characters accepted before the automaton failed.
    pub lexeme: String,
    /// The character that was rejected, or [`None`] at the end of the input.
    pub offending: Option<char>,
    pub error_type: ErrorType,
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.error_type, self.location)
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.range
    }

    fn location(&self) -> Location {
        self.location
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}
