//! Contains the deterministic finite automaton that recognizes a single token.
//!
//! The automaton is written as an explicit dispatch table over ([`State`], [`CharacterClass`])
//! pairs. It only knows which states are accepting; choosing the longest accepted prefix (and
//! rolling back past characters consumed after it) is the job of the [`crate::scanner::Scanner`].

use crate::{
    character_class::{CharacterClass, OperatorSymbol, QuoteKind},
    token::TokenKind,
};

/// Every operator the automaton accepts.
pub const OPERATORS: [&str; 21] = [
    "+", "-", "*", "/", "//", "%", "**", "=", "==", "!=", "<", "<=", ">", ">=", "+=", "-=", "*=",
    "/=", "%=", "**=", "//=",
];

/// Is an enumeration of the states of the token automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Nothing consumed yet.
    Start,

    /// Inside an identifier or keyword.
    Identifier,

    /// Inside the digits of an integer.
    Integer,

    /// Just consumed the `.` after an integer; a digit must follow for a float.
    FractionStart,

    /// Inside the fractional digits of a float.
    Fraction,

    /// Inside a string literal opened by the given quote.
    String(QuoteKind),

    /// Just consumed a `\` inside a string literal.
    StringEscape(QuoteKind),

    /// Consumed the closing quote of a string literal.
    StringEnd,

    /// Consumed an unescaped line break inside a string literal; the literal can no longer be
    /// closed.
    StringBroken,

    /// Inside a comment.
    Comment,

    /// Consumed a line break.
    Newline,

    /// Consumed a delimiter or a lone `.`.
    Delimiter,

    /// Consumed the first character of an operator.
    Operator(OperatorSymbol),

    /// Consumed `**` or `//`.
    DoubleOperator(OperatorSymbol),

    /// Consumed the `=` that ends a comparison or compound assignment operator.
    OperatorAssign,
}

impl State {
    /// Gets the state reached by consuming a character of the given class, or [`None`] if the
    /// character cannot extend the current token.
    ///
    /// Whitespace and the end of the input never leave [`State::Start`]; the scanner handles them
    /// before consulting the table.
    #[must_use]
    pub fn transition(self, class: CharacterClass) -> Option<Self> {
        use CharacterClass as C;

        match (self, class) {
            (Self::Start, C::Letter) | (Self::Identifier, C::Letter | C::Digit) => {
                Some(Self::Identifier)
            }

            (Self::Start | Self::Integer, C::Digit) => Some(Self::Integer),
            (Self::Integer, C::Dot) => Some(Self::FractionStart),
            (Self::FractionStart | Self::Fraction, C::Digit) => Some(Self::Fraction),

            (Self::Start, C::Quote(quote)) => Some(Self::String(quote)),
            (Self::String(quote), C::Quote(closing)) if quote == closing => Some(Self::StringEnd),
            (Self::String(quote), C::Backslash) => Some(Self::StringEscape(quote)),
            (Self::String(_), C::Newline) => Some(Self::StringBroken),
            (Self::String(_) | Self::StringEscape(_), C::EndOfInput) => None,
            (Self::String(quote) | Self::StringEscape(quote), _) => Some(Self::String(quote)),

            (Self::Start, C::CommentStart) => Some(Self::Comment),
            (Self::Comment, C::Newline | C::EndOfInput) => None,
            (Self::Comment, _) => Some(Self::Comment),

            (Self::Start, C::Newline) => Some(Self::Newline),
            (Self::Start, C::Delimiter | C::Dot) => Some(Self::Delimiter),

            (Self::Start, C::Operator(symbol)) => Some(Self::Operator(symbol)),
            (
                Self::Operator(OperatorSymbol::Star),
                C::Operator(OperatorSymbol::Star),
            ) => Some(Self::DoubleOperator(OperatorSymbol::Star)),
            (
                Self::Operator(OperatorSymbol::Slash),
                C::Operator(OperatorSymbol::Slash),
            ) => Some(Self::DoubleOperator(OperatorSymbol::Slash)),
            (Self::Operator(_) | Self::DoubleOperator(_), C::Operator(OperatorSymbol::Equal)) => {
                Some(Self::OperatorAssign)
            }

            _ => None,
        }
    }

    /// Gets the kind of token recognized when the automaton stops in this state, or [`None`] if
    /// the state is not accepting.
    ///
    /// Identifiers are reported as [`TokenKind::Identifier`]; telling keywords apart is left to
    /// the keyword set.
    #[must_use]
    pub fn accepting(self) -> Option<TokenKind> {
        match self {
            Self::Identifier => Some(TokenKind::Identifier),
            Self::Integer => Some(TokenKind::Integer),
            Self::Fraction => Some(TokenKind::Float),
            Self::StringEnd => Some(TokenKind::String),
            Self::Comment => Some(TokenKind::Comment),
            Self::Newline => Some(TokenKind::Newline),
            Self::Delimiter => Some(TokenKind::Delimiter),
            Self::Operator(OperatorSymbol::Bang) => None,
            Self::Operator(_) | Self::DoubleOperator(_) | Self::OperatorAssign => {
                Some(TokenKind::Operator)
            }
            Self::Start
            | Self::FractionStart
            | Self::String(_)
            | Self::StringEscape(_)
            | Self::StringBroken => None,
        }
    }

    /// Returns `true` while the automaton is inside an unfinished string literal, including one
    /// cut off by a line break.
    #[must_use]
    pub fn is_in_string(self) -> bool {
        matches!(
            self,
            Self::String(_) | Self::StringEscape(_) | Self::StringBroken
        )
    }
}
