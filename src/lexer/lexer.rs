//! The engine that drives the automaton over the input.
use crate::{prelude::*, span::*};

use super::{
    char_lexer::*,
    error::*,
    state::{transition, Action, State},
    tokens::*,
};

/// Pull-based lexer. Each call to [`Lexer::next_token`] runs the automaton
/// from the start state until it emits a token or fails.
pub struct Lexer<'s> {
    chars: CharLexer<'s>,
    state: State,
    lexeme: String,
    lexeme_start: Bytes,
    lexeme_location: Location,
    finished: bool,
}

/// Lexes the whole source, collecting every token or every error.
///
/// A failure does not stop the scan: the engine has already stepped past the
/// offending character, so lexing resumes right after it.
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];
    let mut errors = vec![];

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let is_eof = token.kind == TokenKind::Eof;
                tokens.push(token);
                if is_eof {
                    break;
                }
            }
            Err(error) => errors.push(error),
        }
    }

    if !errors.is_empty() {
        Err(errors)
    } else {
        Ok(tokens)
    }
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            chars: CharLexer::new(source),
            state: State::Start,
            lexeme: String::new(),
            lexeme_start: Bytes::new(0),
            lexeme_location: Location::default(),
            finished: false,
        }
    }

    /// Runs the automaton until it produces a token or a [`LexError`].
    /// Once the end of the input has been reached, keeps returning
    /// [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.reset();

        loop {
            let ch = self.chars.current();
            let action = transition(self.state, ch, &self.lexeme);
            trace!("{:?} on {:?}: {:?}", self.state, ch, action);

            match action {
                Action::Advance(next) => self.advance(next),
                Action::Discard(next) => self.discard(next),
                Action::Goto(next) => self.goto(next),
                Action::Emit(kind) => return Ok(self.emit(kind)),
                Action::Restart => self.restart(),
                Action::Fail(error_type) => return Err(self.fail(error_type)),
            }
        }
    }

    fn advance(&mut self, next: State) {
        if let Some(ch) = self.chars.advance() {
            self.lexeme.push(ch);
        }
        self.state = next;
    }

    fn discard(&mut self, next: State) {
        self.chars.advance();
        self.state = next;
    }

    fn goto(&mut self, next: State) {
        self.state = next;
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            text: std::mem::take(&mut self.lexeme),
            source: Span::new(self.lexeme_start, self.chars.byte_position()),
            location: self.lexeme_location,
        };
        debug!("Emit {} at {}", token, token.location);

        if kind == TokenKind::Eof {
            self.finished = true;
        }
        self.state = State::Start;
        token
    }

    fn restart(&mut self) {
        self.chars.advance();
        if !self.lexeme.is_empty() {
            debug!("Skip {:?} at {}", self.lexeme, self.lexeme_location);
        }
        self.reset();
    }

    fn fail(&mut self, error_type: ErrorType) -> LexError {
        let offending = self.chars.advance();
        let error = LexError {
            range: Span::new(self.lexeme_start, self.chars.byte_position()),
            location: self.lexeme_location,
            lexeme: std::mem::take(&mut self.lexeme),
            offending,
            error_type,
        };
        debug!("Fail at {}: {}", error.location, error.error_type);

        self.state = State::Start;
        error
    }

    /// Returns to the start state, marking the cursor as the start of the
    /// next lexeme.
    fn reset(&mut self) {
        self.state = State::Start;
        self.lexeme.clear();
        self.lexeme_start = self.chars.byte_position();
        self.lexeme_location = self.chars.location();
    }
}

/// Yields every token up to and including [`TokenKind::Eof`].
/// Stops after the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}
