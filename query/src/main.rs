use std::process::ExitCode;

use query_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    query_driver::run(&argument)
}
