//! Error type for a single generator run.

use std::io;

use thiserror::Error;

use crate::exits;

#[derive(Debug, Error)]
pub enum Error {
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("failed to write password: {0}")]
    Output(#[from] io::Error),

    #[error("No output set! Generated password dumped!")]
    NoOutputConfigured,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::EntropyUnavailable(_) | Error::ClipboardUnavailable(_) | Error::Clipboard(_) => {
                exits::MISSING_DEPENDENCY
            }
            Error::Output(_) => exits::FAILURE,
            Error::NoOutputConfigured => exits::NO_OUTPUT,
        }
    }

    /// True when a required capability of the host is missing.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(
            self,
            Error::EntropyUnavailable(_) | Error::ClipboardUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::EntropyUnavailable("x".into()).exit_code(), 2);
        assert_eq!(Error::ClipboardUnavailable("x".into()).exit_code(), 2);
        assert_eq!(Error::Clipboard("x".into()).exit_code(), 2);
        assert_eq!(Error::NoOutputConfigured.exit_code(), 3);
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(Error::from(io).exit_code(), 1);
    }

    #[test]
    fn missing_dependency_kinds() {
        assert!(Error::EntropyUnavailable("x".into()).is_missing_dependency());
        assert!(Error::ClipboardUnavailable("x".into()).is_missing_dependency());
        assert!(!Error::Clipboard("x".into()).is_missing_dependency());
        assert!(!Error::NoOutputConfigured.is_missing_dependency());
    }

    #[test]
    fn no_output_message() {
        assert_eq!(
            Error::NoOutputConfigured.to_string(),
            "No output set! Generated password dumped!"
        );
    }
}
