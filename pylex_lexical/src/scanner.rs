//! Contains the [`Scanner`], which turns the text of a source file into [`Token`]s one at a time.

use std::sync::Arc;

use pylex_base::{
    diagnostic::Handler,
    source_file::{ByteIndex, Location, SourceFile, Span},
};

use crate::{
    automaton::State,
    character_class::CharacterClass,
    error::{self, InvalidCharacter, UnterminatedString},
    keyword::KeywordSet,
    token::{Token, TokenKind},
};

/// Represents the options recognized by a scanning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Configuration {
    /// Whether [`TokenKind::Newline`] tokens are produced.
    pub emit_newlines: bool,

    /// Whether [`TokenKind::Comment`] tokens are produced.
    pub emit_comments: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            emit_newlines: true,
            emit_comments: true,
        }
    }
}

/// The position of the scanner in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    offset: ByteIndex,
    location: Location,
}

/// Produces the tokens of a source file, one per call to [`Scanner::next_token`].
///
/// Each token is the longest prefix of the remaining input the token automaton accepts. Leading
/// spaces and tabs are skipped. Malformed input becomes [`TokenKind::Error`] tokens, each also
/// reported to the handler, and scanning carries on after them.
///
/// Once the end of the input is reached the scanner keeps returning the same
/// [`TokenKind::Eof`] token.
pub struct Scanner<'a> {
    source_file: &'a Arc<SourceFile>,
    keywords: &'a KeywordSet,
    configuration: Configuration,
    handler: &'a dyn Handler<error::Error>,
    cursor: Cursor,
    finished: bool,
}

impl<'a> std::fmt::Debug for Scanner<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("source_file", self.source_file)
            .field("configuration", &self.configuration)
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of the given source file.
    #[must_use]
    pub fn new(
        source_file: &'a Arc<SourceFile>,
        keywords: &'a KeywordSet,
        configuration: Configuration,
        handler: &'a dyn Handler<error::Error>,
    ) -> Self {
        Self {
            source_file,
            keywords,
            configuration,
            handler,
            cursor: Cursor {
                offset: 0,
                location: Location { line: 1, column: 1 },
            },
            finished: false,
        }
    }

    /// Returns `true` once the [`TokenKind::Eof`] token has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool { self.finished }

    /// Produces the next token.
    ///
    /// Every call consumes at least one character unless the end of the input has been reached,
    /// in which case a zero-width [`TokenKind::Eof`] token is returned (again and again).
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let start = self.cursor;

            let Some(first) = self.peek() else {
                self.finished = true;
                return self.make_token(TokenKind::Eof, start);
            };

            let token = self.scan(start, first);
            match token.kind() {
                TokenKind::Newline if !self.configuration.emit_newlines => (),
                TokenKind::Comment if !self.configuration.emit_comments => (),
                _ => return token,
            }
        }
    }

    fn peek(&self) -> Option<char> { self.source_file.content()[self.cursor.offset..].chars().next() }

    fn bump(&mut self) -> Option<char> {
        let character = self.peek()?;

        self.cursor.offset += character.len_utf8();
        if character == '\n' {
            self.cursor.location.line += 1;
            self.cursor.location.column = 1;
        } else {
            self.cursor.location.column += 1;
        }

        Some(character)
    }

    fn skip_whitespace(&mut self) {
        while CharacterClass::of(self.peek()) == CharacterClass::Whitespace {
            self.bump();
        }
    }

    /// Runs the token automaton from `start`, where `first` is the next character, and turns the
    /// longest accepted prefix into a token.
    fn scan(&mut self, start: Cursor, first: char) -> Token {
        let mut state = State::Start;
        let mut accepted: Option<(TokenKind, Cursor)> = None;

        while let Some(next) = state.transition(CharacterClass::of(self.peek())) {
            self.bump();
            state = next;

            if let Some(kind) = state.accepting() {
                accepted = Some((kind, self.cursor));
            }
        }

        if let Some((kind, end)) = accepted {
            // give back whatever was consumed past the last accepting state
            self.cursor = end;

            let lexeme = &self.source_file.content()[start.offset..end.offset];
            let kind = if kind == TokenKind::Identifier && self.keywords.contains(lexeme) {
                TokenKind::Keyword
            } else {
                kind
            };

            return self.make_token(kind, start);
        }

        if state.is_in_string() {
            let token = self.make_token(TokenKind::Error, start);
            self.handler.receive(
                UnterminatedString {
                    span: token.span().clone(),
                }
                .into(),
            );

            return token;
        }

        // nothing starts here: the first character alone is the error
        self.cursor = start;
        self.bump();

        let token = self.make_token(TokenKind::Error, start);
        self.handler.receive(
            InvalidCharacter {
                span: token.span().clone(),
                character: first,
            }
            .into(),
        );

        token
    }

    /// Makes a token spanning from `start` to the current position.
    fn make_token(&self, kind: TokenKind, start: Cursor) -> Token {
        let span = Span::new(self.source_file.clone(), start.offset, self.cursor.offset)
            .expect("the cursor only stops on character boundaries");

        Token::new(kind, span, start.location)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    /// Yields every token up to and including the [`TokenKind::Eof`] token, then [`None`].
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        Some(self.next_token())
    }
}
