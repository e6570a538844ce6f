use std::env;
use std::process::ExitCode;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
