//! The command-line front end of pylex: loads source files, scans them and prints the token
//! listing of each.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    cell::Cell,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use pylex_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use pylex_lexical::{
    error, keyword::KeywordSet, scanner::Configuration, token::Token, token_stream::TokenStream,
};
use thiserror::Error;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "pylex",
    about = "Lists the tokens of Python-like source files."
)]
pub struct Argument {
    /// The source files to scan.
    #[clap(required = true)]
    pub files: Vec<PathBuf>,

    /// Leaves the NEWLINE tokens out of the listing.
    #[clap(long = "no-newlines")]
    pub no_newlines: bool,

    /// Leaves the COMMENT tokens out of the listing.
    #[clap(long = "no-comments")]
    pub no_comments: bool,
}

impl Argument {
    /// Gets the scanner configuration selected by the flags.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        Configuration {
            emit_newlines: !self.no_newlines,
            emit_comments: !self.no_comments,
        }
    }
}

/// Is an enumeration of the errors that can stop the driver from listing a file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: source_file::Error,
    },

    #[error("failed to write the token listing: {0}")]
    Io(#[from] io::Error),
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl Handler<error::Error> for Printer {
    fn receive(&self, error: error::Error) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

impl Handler<Error> for Printer {
    fn receive(&self, error: Error) {
        eprintln!("{}", Message::new(Severity::Error, error));
        self.printed.set(true);
    }
}

/// Quotes a lexeme for the listing the way Python's `repr` quotes a string.
///
/// Single quotes are used unless the lexeme contains a single quote and no double quote.
/// Backslashes, the chosen quote and control characters are escaped.
#[must_use]
pub fn quote_lexeme(lexeme: &str) -> String {
    let quote = if lexeme.contains('\'') && !lexeme.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(lexeme.len() + 2);
    quoted.push(quote);

    for character in lexeme.chars() {
        match character {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            character if character == quote => {
                quoted.push('\\');
                quoted.push(character);
            }
            character if character.is_control() => {
                quoted.push_str(&format!("\\x{:02x}", u32::from(character)));
            }
            character => quoted.push(character),
        }
    }

    quoted.push(quote);
    quoted
}

/// Writes the listing line of a token: `line:column`, the kind and the quoted lexeme, separated
/// by tabs.
///
/// # Errors
/// Any error of the underlying writer.
pub fn write_token(output: &mut dyn Write, token: &Token) -> io::Result<()> {
    writeln!(
        output,
        "{}\t{:<10}\t{}",
        token.location(),
        token.kind().name(),
        quote_lexeme(token.lexeme())
    )
}

fn write_banner(output: &mut dyn Write, path: &Path) -> io::Result<()> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    writeln!(output, "{}", "=".repeat(80))?;
    writeln!(output, "FILE: {name}")
}

/// Lists the tokens of every file named by the argument into `output`.
///
/// A file that cannot be loaded is reported to the `handler` as [`Error::Load`] and skipped;
/// lexical errors are reported to the `handler` as they are found.
///
/// # Errors
/// [`Error::Io`]: writing to `output` failed.
pub fn execute<H>(argument: &Argument, output: &mut dyn Write, handler: &H) -> Result<(), Error>
where
    H: Handler<error::Error> + Handler<Error>,
{
    let keywords = KeywordSet::python();
    let configuration = argument.configuration();

    for path in &argument.files {
        if argument.files.len() > 1 {
            write_banner(output, path)?;
        }

        let source_file = match SourceFile::open(path) {
            Ok(source_file) => source_file,
            Err(source) => {
                Handler::<Error>::receive(handler, Error::Load {
                    path: path.clone(),
                    source,
                });
                continue;
            }
        };

        let token_stream = TokenStream::tokenize(&source_file, &keywords, configuration, handler);
        for token in token_stream.iter() {
            write_token(output, token)?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let printer = Printer::new();
    let mut output = BufWriter::new(io::stdout().lock());

    if let Err(error) = execute(&argument, &mut output, &printer) {
        Handler::<Error>::receive(&printer, error);
    }

    if printer.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests;
