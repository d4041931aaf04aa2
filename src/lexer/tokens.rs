//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::{Location, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text matched by the automaton.
    pub text: String,
    pub source: Span,
    pub location: Location,
}
impl Token {
    /// For a [`TokenKind::StrVal`] token, the text between the quotes.
    pub fn string_value(&self) -> Option<&str> {
        match self.kind {
            TokenKind::StrVal => self
                .text
                .strip_prefix('"')
                .and_then(|text| text.strip_suffix('"')),
            _ => None,
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "{} {:?}", self.kind, self.text),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Id,
    IntVal,
    StrVal,
    // Reserved words
    Entero,
    Cadena,
    Si,
    Sino,
    Mientras,
    Fin,
    Imprimir,
    // Operators
    Asign,
    Sum,
    Mul,
    Rel,
    Neg,
    Or,
    And,
    // Delimiters
    IPar,
    DPar,
}

impl TokenKind {
    /// Every reserved word together with the kind it lexes to.
    pub const KEYWORDS: [(&'static str, TokenKind); 7] = [
        ("entero", TokenKind::Entero),
        ("cadena", TokenKind::Cadena),
        ("si", TokenKind::Si),
        ("sino", TokenKind::Sino),
        ("mientras", TokenKind::Mientras),
        ("fin", TokenKind::Fin),
        ("imprimir", TokenKind::Imprimir),
    ];

    /// Looks up the reserved word spelled exactly `text`.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "entero" => TokenKind::Entero,
            "cadena" => TokenKind::Cadena,
            "si" => TokenKind::Si,
            "sino" => TokenKind::Sino,
            "mientras" => TokenKind::Mientras,
            "fin" => TokenKind::Fin,
            "imprimir" => TokenKind::Imprimir,
            _ => return None,
        })
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Entero
                | TokenKind::Cadena
                | TokenKind::Si
                | TokenKind::Sino
                | TokenKind::Mientras
                | TokenKind::Fin
                | TokenKind::Imprimir
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Id => "ID",
            TokenKind::IntVal => "INTVAL",
            TokenKind::StrVal => "STRVAL",
            TokenKind::Entero => "ENTERO",
            TokenKind::Cadena => "CADENA",
            TokenKind::Si => "SI",
            TokenKind::Sino => "SINO",
            TokenKind::Mientras => "MIENTRAS",
            TokenKind::Fin => "FIN",
            TokenKind::Imprimir => "IMPRIMIR",
            TokenKind::Asign => "ASIGN",
            TokenKind::Sum => "SUM",
            TokenKind::Mul => "MUL",
            TokenKind::Rel => "REL",
            TokenKind::Neg => "NEG",
            TokenKind::Or => "OR",
            TokenKind::And => "AND",
            TokenKind::IPar => "IPAR",
            TokenKind::DPar => "DPAR",
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_agrees_with_keyword_table() {
        for (spelling, kind) in TokenKind::KEYWORDS {
            assert_eq!(TokenKind::keyword(spelling), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword("Si"), None);
        assert_eq!(TokenKind::keyword("sin"), None);
        assert_eq!(TokenKind::keyword("finx"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn string_value_strips_quotes() {
        let token = Token {
            kind: TokenKind::StrVal,
            text: "\"hola\"".to_string(),
            source: Span::default(),
            location: Location::default(),
        };

        assert_eq!(token.string_value(), Some("hola"));
    }

    #[test]
    fn string_value_is_only_for_string_literals() {
        let token = Token {
            kind: TokenKind::IntVal,
            text: "0042".to_string(),
            source: Span::default(),
            location: Location::default(),
        };

        assert_eq!(token.string_value(), None);
        assert_eq!(token.to_string(), "INTVAL \"0042\"");
    }
}
