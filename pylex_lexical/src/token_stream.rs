//! Contains the [`TokenStream`] struct: the complete output of the lexical analysis of a source
//! file.

use std::sync::Arc;

use derive_more::Deref;
use pylex_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{
    error,
    keyword::KeywordSet,
    scanner::{Configuration, Scanner},
    token::Token,
};

/// Is the ordered list of every token of a source file.
///
/// The list always ends with exactly one [`crate::token::TokenKind::Eof`] token. This struct is
/// the final output of the lexical analysis phase and is meant to be used by the next stage of
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// This function runs a [`Scanner`] over the source file until it produces the end-of-input
    /// token. Lexical errors are reported to the `handler` and kept in the stream as error
    /// tokens.
    #[must_use]
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        keywords: &KeywordSet,
        configuration: Configuration,
        handler: &dyn Handler<error::Error>,
    ) -> Self {
        Self {
            tokens: Scanner::new(source_file, keywords, configuration, handler).collect(),
        }
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}
