//! Centralized user-facing messages outside the log stream.

use super::help::requirements_text;
use crate::error::Error;
use crate::terminal::{print_error, print_warning};

/// Report a terminal error on stderr.
pub fn error(err: &Error) {
    if err.is_missing_dependency() {
        eprint!("{}", requirements_text());
    }
    print_error(&err.to_string());
}

pub fn debug_mode_warning() {
    print_warning("Debug mode prints pool contents. Do not use this password.");
}
