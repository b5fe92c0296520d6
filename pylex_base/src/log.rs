//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        }
        .bold();

        write!(f, "{log_header} {}", Style::Bold.with(&self.display))
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 1;

    while number >= 10 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Printed width of a character in a source excerpt.
fn width(character: char) -> usize {
    match character {
        '\t' => 4,
        '\r' => 0,
        _ => 1,
    }
}

/// Structure implementing [`Display`] that prints the lines covered by a span with the spanned
/// characters marked by carets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message printed after the carets of the last line.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start = self.span.start_location();
        let end = self.span.end_location();

        // a span that ends right after a line break does not reach into the next line
        let last_line = if end.line > start.line && end.column == 1 {
            end.line - 1
        } else {
            end.line
        };

        let gutter = get_digit(last_line);
        let pipe = Color::Cyan.with("┃").bold();

        writeln!(
            f,
            "{:gutter$}{} {}:{start}",
            "",
            Color::Cyan.with("-->").bold(),
            source_file.path().display(),
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        for line_number in start.line..=last_line {
            let Some(line) = source_file.get_line(line_number) else {
                break;
            };

            let from = if line_number == start.line {
                start.column
            } else {
                1
            };
            let to = if line_number == end.line {
                end.column
            } else {
                line.chars().count() + 1
            };

            write!(
                f,
                "{} {pipe} ",
                Color::Cyan.with(format!("{line_number:>gutter$}")).bold()
            )?;
            for character in line.chars() {
                match character {
                    '\t' => f.write_str("    ")?,
                    '\r' => (),
                    _ => write!(f, "{character}")?,
                }
            }
            writeln!(f)?;

            let padding: usize = line.chars().take(from - 1).map(width).sum();
            let carets: usize = line
                .chars()
                .skip(from - 1)
                .take(to.saturating_sub(from))
                .map(width)
                .sum();

            // empty spans and spans at the end of a line still get one caret
            write!(
                f,
                "{:gutter$} {pipe} {:padding$}{}",
                "",
                "",
                Color::Red.with("^".repeat(carets.max(1))).bold()
            )?;

            if line_number == last_line {
                if let Some(help) = &self.help_display {
                    write!(f, " {}: {help}", Style::Bold.with("help"))?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "{:gutter$} {pipe}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::{get_digit, Message, Severity, SourceCodeDisplay};
    use crate::source_file::{SourceFile, Span};

    /// Removes the ANSI escape sequences from the given text.
    fn strip_ansi(text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars();

        while let Some(character) = chars.next() {
            if character == '\x1B' {
                for code in chars.by_ref() {
                    if code == 'm' {
                        break;
                    }
                }
            } else {
                result.push(character);
            }
        }

        result
    }

    #[test]
    fn digits() {
        assert_eq!(get_digit(0), 1);
        assert_eq!(get_digit(9), 1);
        assert_eq!(get_digit(10), 2);
        assert_eq!(get_digit(12345), 5);
    }

    #[test]
    fn message_header() {
        let message = Message::new(Severity::Warning, "careful");
        assert_eq!(strip_ansi(&message.to_string()), "[warning]: careful");
    }

    #[test]
    fn excerpt_marks_the_span() {
        let source_file = SourceFile::in_memory("excerpt.py", "x = 1\ny = \"abc\nz = 2\n");
        let span = Span::new(source_file, 10, 14).unwrap();

        let rendered = strip_ansi(&SourceCodeDisplay::new(&span, Some("close it")).to_string());

        assert_eq!(
            rendered,
            " --> excerpt.py:2:5\n  ┃\n2 ┃ y = \"abc\n  ┃     ^^^^ help: close it\n  ┃\n"
        );
    }

    #[test]
    fn excerpt_of_an_empty_span() {
        let source_file = SourceFile::in_memory("empty.py", "ab");
        let span = Span::new(source_file, 2, 2).unwrap();

        let rendered = strip_ansi(&SourceCodeDisplay::new(&span, Option::<&str>::None).to_string());

        assert_eq!(rendered, " --> empty.py:1:3\n  ┃\n1 ┃ ab\n  ┃   ^\n  ┃\n");
    }
}
