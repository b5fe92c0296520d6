use std::process::ExitCode;

use pylex_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    pylex_driver::run(argument)
}
