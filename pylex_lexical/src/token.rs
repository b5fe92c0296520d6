//! Is a module containing the [`Token`] type and all of its related types.

use derive_new::new;
use getset::{CopyGetters, Getters};
use pylex_base::source_file::{Location, SourceElement, Span};
use strum_macros::{EnumIter, IntoStaticStr};

/// Is an enumeration of the classes a token can belong to.
///
/// See [`TokenKind::name`] for the tag used when listing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A member of the keyword set.
    Keyword,

    /// A letter or `_` followed by letters, digits and `_`, that is not a keyword.
    Identifier,

    /// A run of digits.
    Integer,

    /// A run of digits, a `.` and another run of digits.
    Float,

    /// A quoted string literal, quotes included and escapes left as written.
    String,

    /// One of the arithmetic, comparison or assignment operators.
    Operator,

    /// A single `( ) [ ] { } , : ; .` character.
    Delimiter,

    /// A `#` and the rest of its line, excluding the line break.
    Comment,

    /// A `\n` line break.
    Newline,

    /// The zero-width marker that ends every token sequence.
    Eof,

    /// An invalid character or an unterminated string literal.
    Error,
}

impl TokenKind {
    /// Gets the upper-case tag of the kind, e.g. `IDENTIFIER` or `EOF`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// Represents a classified piece of source text.
///
/// Tokens are immutable once produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the class of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the span of source text the token was made from.
    #[get = "pub"]
    span: Span,

    /// Gets the location of the first character of the token.
    #[get_copy = "pub"]
    location: Location,
}

impl Token {
    /// Gets the exact source text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }

    /// Gets the line of the first character of the token (starts at 1).
    #[must_use]
    pub fn line(&self) -> usize { self.location.line }

    /// Gets the column of the first character of the token (starts at 1).
    #[must_use]
    pub fn column(&self) -> usize { self.location.column }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub fn is_eof(&self) -> bool { self.kind == TokenKind::Eof }

    /// Returns `true` if this token reports a lexical error.
    #[must_use]
    pub fn is_error(&self) -> bool { self.kind == TokenKind::Error }

    /// Gets the body of a string literal: the lexeme without its delimiting quotes.
    ///
    /// Escape sequences are returned as written. Returns [`None`] for any other kind of token.
    #[must_use]
    pub fn unquoted(&self) -> Option<&str> {
        if self.kind != TokenKind::String {
            return None;
        }

        let lexeme = self.lexeme();
        lexeme.get(1..lexeme.len().saturating_sub(1))
    }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}

#[cfg(test)]
mod tests {
    use pylex_base::source_file::{Location, SourceFile, Span};
    use strum::IntoEnumIterator;

    use super::{Token, TokenKind};

    fn token(kind: TokenKind, text: &str) -> Token {
        let source_file = SourceFile::in_memory("token.py", text);
        let span = Span::new(source_file, 0, text.len()).unwrap();

        Token::new(kind, span, Location { line: 1, column: 1 })
    }

    #[test]
    fn kind_tags() {
        let tags: Vec<&str> = TokenKind::iter().map(TokenKind::name).collect();

        assert_eq!(tags, [
            "KEYWORD",
            "IDENTIFIER",
            "INTEGER",
            "FLOAT",
            "STRING",
            "OPERATOR",
            "DELIMITER",
            "COMMENT",
            "NEWLINE",
            "EOF",
            "ERROR",
        ]);
    }

    #[test]
    fn unquoted_string_body() {
        assert_eq!(
            token(TokenKind::String, r#""a\"b""#).unquoted(),
            Some(r#"a\"b"#)
        );
        assert_eq!(token(TokenKind::String, "''").unquoted(), Some(""));
        assert_eq!(token(TokenKind::Identifier, "abc").unquoted(), None);
    }

    #[test]
    fn accessors() {
        let token = token(TokenKind::Float, "1.5");

        assert_eq!(token.lexeme(), "1.5");
        assert_eq!((token.line(), token.column()), (1, 1));
        assert!(!token.is_eof());
        assert!(!token.is_error());
    }
}
