//! Contains the [`CharacterClass`] type: the reduced input alphabet the scanning automaton works
//! on.

/// Is an enumeration of the two quote characters that can open a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteKind {
    /// `'`
    Single,

    /// `"`
    Double,
}

impl QuoteKind {
    /// Gets the quote character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Is an enumeration of the characters that can start an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum OperatorSymbol {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    Less,
    Greater,
    Bang,
}

impl OperatorSymbol {
    /// Gets the symbol character.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::Equal => '=',
            Self::Less => '<',
            Self::Greater => '>',
            Self::Bang => '!',
        }
    }
}

/// Is an enumeration of the semantic classes of a single input character.
///
/// Every character, and the end of the input, belongs to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    /// ASCII letters and `_`.
    Letter,

    /// ASCII digits.
    Digit,

    /// `.`, either a delimiter or the decimal point of a float.
    Dot,

    /// `'` or `"`.
    Quote(QuoteKind),

    /// `#`.
    CommentStart,

    /// One of `+ - * / % = < > !`.
    Operator(OperatorSymbol),

    /// One of `( ) [ ] { } , : ;`.
    Delimiter,

    /// `\`, which escapes the following character inside a string literal.
    Backslash,

    /// Space and tab.
    Whitespace,

    /// `\n`.
    Newline,

    /// The end of the input.
    EndOfInput,

    /// Any character without a meaning of its own.
    Other,
}

impl CharacterClass {
    /// Classifies the given character; [`None`] stands for the end of the input.
    #[must_use]
    pub fn of(character: Option<char>) -> Self {
        let Some(character) = character else {
            return Self::EndOfInput;
        };

        match character {
            'a'..='z' | 'A'..='Z' | '_' => Self::Letter,
            '0'..='9' => Self::Digit,
            '.' => Self::Dot,
            '\'' => Self::Quote(QuoteKind::Single),
            '"' => Self::Quote(QuoteKind::Double),
            '#' => Self::CommentStart,
            '+' => Self::Operator(OperatorSymbol::Plus),
            '-' => Self::Operator(OperatorSymbol::Minus),
            '*' => Self::Operator(OperatorSymbol::Star),
            '/' => Self::Operator(OperatorSymbol::Slash),
            '%' => Self::Operator(OperatorSymbol::Percent),
            '=' => Self::Operator(OperatorSymbol::Equal),
            '<' => Self::Operator(OperatorSymbol::Less),
            '>' => Self::Operator(OperatorSymbol::Greater),
            '!' => Self::Operator(OperatorSymbol::Bang),
            '(' | ')' | '[' | ']' | '{' | '}' | ',' | ':' | ';' => Self::Delimiter,
            '\\' => Self::Backslash,
            ' ' | '\t' => Self::Whitespace,
            '\n' => Self::Newline,
            _ => Self::Other,
        }
    }
}
