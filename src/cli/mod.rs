mod context;
mod flags;
mod help;
mod logger;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::exits;

/// Run one invocation and map the result to the process exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    match Context::new(&args).run() {
        Ok(_) => exits::code(exits::SUCCESS),
        Err(e) => {
            prompts::error(&e);
            exits::code(e.exit_code())
        }
    }
}
