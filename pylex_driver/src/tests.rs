use std::{ffi::OsStr, fs, path::PathBuf};

use pylex_base::{diagnostic::Counter, source_file::SourceFile};
use pylex_lexical::{keyword::KeywordSet, scanner::Configuration, token_stream::TokenStream};
use tempfile::TempDir;

use super::{execute, quote_lexeme, write_token, Argument, Parser};

fn argument(files: Vec<PathBuf>) -> Argument {
    Argument {
        files,
        no_newlines: false,
        no_comments: false,
    }
}

fn listing(argument: &Argument, counter: &Counter) -> String {
    let mut output: Vec<u8> = Vec::new();
    execute(argument, &mut output, counter).unwrap();

    String::from_utf8(output).unwrap()
}

fn write_file(directory: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = directory.path().join(name);
    fs::write(&path, text).unwrap();

    path
}

#[test]
fn quoting() {
    assert_eq!(quote_lexeme(""), "''");
    assert_eq!(quote_lexeme("abc"), "'abc'");
    assert_eq!(quote_lexeme("'a'"), r#""'a'""#);
    assert_eq!(quote_lexeme(r#""a""#), r#"'"a"'"#);
    assert_eq!(quote_lexeme(r#"'a"b'"#), r#"'\'a"b\''"#);
    assert_eq!(quote_lexeme(r"'it\'s'"), r#""'it\\'s'""#);
    assert_eq!(quote_lexeme(r"a\b"), r"'a\\b'");
    assert_eq!(quote_lexeme("\n"), r"'\n'");
    assert_eq!(quote_lexeme("#\tx\r"), r"'#\tx\r'");
    assert_eq!(quote_lexeme("\u{7}"), r"'\x07'");
    assert_eq!(quote_lexeme("é"), "'é'");
}

#[test]
fn token_lines() {
    let source_file = SourceFile::in_memory("line.py", "if a <= 10:");
    let tokens = TokenStream::tokenize(
        &source_file,
        &KeywordSet::python(),
        Configuration::default(),
        &Counter::default(),
    );

    let mut output: Vec<u8> = Vec::new();
    for token in tokens.iter() {
        write_token(&mut output, token).unwrap();
    }

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "1:1\tKEYWORD   \t'if'\n\
         1:4\tIDENTIFIER\t'a'\n\
         1:6\tOPERATOR  \t'<='\n\
         1:9\tINTEGER   \t'10'\n\
         1:11\tDELIMITER \t':'\n\
         1:12\tEOF       \t''\n"
    );
}

#[test]
fn single_file() {
    let directory = TempDir::new().unwrap();
    let path = write_file(&directory, "single.py", "x = 'a'\n# c\n");
    let counter = Counter::default();

    assert_eq!(
        listing(&argument(vec![path]), &counter),
        "1:1\tIDENTIFIER\t'x'\n\
         1:3\tOPERATOR  \t'='\n\
         1:5\tSTRING    \t\"'a'\"\n\
         1:8\tNEWLINE   \t'\\n'\n\
         2:1\tCOMMENT   \t'# c'\n\
         2:4\tNEWLINE   \t'\\n'\n\
         3:1\tEOF       \t''\n"
    );
    assert_eq!(counter.count(), 0);
}

#[test]
fn flags_drop_tokens() {
    let directory = TempDir::new().unwrap();
    let path = write_file(&directory, "flags.py", "x # c\ny\n");
    let counter = Counter::default();

    let argument = Argument::try_parse_from([
        OsStr::new("pylex"),
        OsStr::new("--no-newlines"),
        OsStr::new("--no-comments"),
        path.as_os_str(),
    ])
    .unwrap();

    assert_eq!(
        listing(&argument, &counter),
        "1:1\tIDENTIFIER\t'x'\n\
         2:1\tIDENTIFIER\t'y'\n\
         3:1\tEOF       \t''\n"
    );
}

#[test]
fn several_files_get_banners() {
    let directory = TempDir::new().unwrap();
    let first = write_file(&directory, "a.py", "1");
    let second = write_file(&directory, "b.py", "");
    let counter = Counter::default();

    let banner = "=".repeat(80);
    assert_eq!(
        listing(&argument(vec![first, second]), &counter),
        format!(
            "{banner}\nFILE: a.py\n1:1\tINTEGER   \t'1'\n1:2\tEOF       \t''\n\
             {banner}\nFILE: b.py\n1:1\tEOF       \t''\n"
        )
    );
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let directory = TempDir::new().unwrap();
    let missing = directory.path().join("missing.py");
    let present = write_file(&directory, "present.py", "pass");
    let counter = Counter::default();

    let output = listing(&argument(vec![missing, present]), &counter);

    assert_eq!(counter.count(), 1);
    assert!(output.contains("FILE: missing.py\n"));
    assert!(output.ends_with("FILE: present.py\n1:1\tKEYWORD   \t'pass'\n1:5\tEOF       \t''\n"));
}

#[test]
fn invalid_utf8_is_a_load_error() {
    let directory = TempDir::new().unwrap();
    let path = directory.path().join("binary.py");
    fs::write(&path, [0x66, 0xff, 0xfe]).unwrap();
    let counter = Counter::default();

    assert_eq!(listing(&argument(vec![path]), &counter), "");
    assert_eq!(counter.count(), 1);
}

#[test]
fn lexical_errors_are_listed_and_reported() {
    let directory = TempDir::new().unwrap();
    let path = write_file(&directory, "errors.py", "a $ \"b");
    let counter = Counter::default();

    assert_eq!(
        listing(&argument(vec![path]), &counter),
        "1:1\tIDENTIFIER\t'a'\n\
         1:3\tERROR     \t'$'\n\
         1:5\tERROR     \t'\"b'\n\
         1:7\tEOF       \t''\n"
    );
    assert_eq!(counter.count(), 2);
}

#[test]
fn at_least_one_file_is_required() {
    assert!(Argument::try_parse_from(["pylex"]).is_err());

    let argument = Argument::try_parse_from(["pylex", "a.py", "b.py"]).unwrap();
    assert_eq!(argument.files, [PathBuf::from("a.py"), PathBuf::from("b.py")]);
    assert_eq!(argument.configuration(), Configuration::default());
}
