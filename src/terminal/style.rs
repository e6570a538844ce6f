//! Colored stderr messages, plain when stderr is not a terminal.

use std::io;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

fn colored(msg: &str, color: Color) -> String {
    if io::stderr().is_tty() {
        msg.with(color).to_string()
    } else {
        msg.to_string()
    }
}

/// Print an error message to stderr in red.
pub fn print_error(msg: &str) {
    eprintln!("{}", colored(msg, Color::Red));
}

/// Print a warning message to stderr in yellow.
pub fn print_warning(msg: &str) {
    eprintln!("{}", colored(msg, Color::Yellow));
}
