use std::process::ExitCode;

use collbench::cli::{self, Menu};

fn main() -> ExitCode {
    cli::main(Menu::Set)
}
