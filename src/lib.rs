//! A lexical analyzer built around an explicit deterministic finite automaton.
//!
//! ```
//! use afdlex::lexer::{lex, tokens::TokenKind};
//!
//! let tokens = lex("si x <> 0 imprimir x").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Si);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
pub mod error;
pub mod lexer;
mod prelude;
pub mod source_map;
pub mod span;
