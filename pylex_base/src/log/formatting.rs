//! Contains various kinds of definition for formatting ASCII color/style codes.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> { Styled::new(display).style(self) }

    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> { Styled::new(display).color(self) }

    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object with an optional color
/// and any number of styles.
///
/// All escape codes are emitted before the object and a single reset code after it, so nested
/// wrappers do not cancel each other out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<T> {
    /// The displayable object.
    pub display: T,

    /// The color applied to the object, if any.
    pub color: Option<Color>,

    /// Whether the object is printed in bold.
    pub bold: bool,

    /// Whether the object is underlined.
    pub underline: bool,
}

impl<T> Styled<T> {
    /// Wraps the object without any color or style.
    pub fn new(display: T) -> Self {
        Self {
            display,
            color: None,
            bold: false,
            underline: false,
        }
    }

    /// Sets the color of the object.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Adds the given style to the object.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        match style {
            Style::Bold => self.bold = true,
            Style::Underline => self.underline = true,
        }
        self
    }

    /// Shorthand for `style(Style::Bold)`.
    #[must_use]
    pub fn bold(self) -> Self { self.style(Style::Bold) }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(color) = self.color {
            f.write_str(color.code())?;
        }
        if self.bold {
            f.write_str(Style::Bold.code())?;
        }
        if self.underline {
            f.write_str(Style::Underline.code())?;
        }

        write!(f, "{}\x1B[0m", self.display)
    }
}
