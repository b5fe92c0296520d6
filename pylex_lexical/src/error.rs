//! Contains all kinds of lexical errors that can occur while tokenizing the source code.
//!
//! Lexical errors never stop the scan: each one is reported to a
//! [`pylex_base::diagnostic::Handler`] and also shows up as an
//! [`crate::token::TokenKind::Error`] token in the token sequence.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use pylex_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// The source code contains a character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidCharacter {
    /// The span of the offending character.
    pub span: Span,

    /// The offending character.
    pub character: char,
}

impl Display for InvalidCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("found an invalid character {:?}", self.character)
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// A string literal is not closed before the end of its line or of the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnterminatedString {
    /// The span from the opening quote up to where the scanner gave up.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("this string is not closed by a matching quote")
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    InvalidCharacter(InvalidCharacter),
    UnterminatedString(UnterminatedString),
}

impl Error {
    /// Gets the span the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidCharacter(error) => &error.span,
            Self::UnterminatedString(error) => &error.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
        }
    }
}
