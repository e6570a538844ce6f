//! The generated secret.

use std::fmt;

use zeroize::Zeroize;

/// One generated password. Wiped from memory when dropped.
///
/// `Debug` is redacted so the value cannot slip into a log line.
pub struct Password(String);

impl Password {
    pub(super) fn with_capacity(length: usize) -> Self {
        Password(String::with_capacity(length))
    }

    pub(super) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.0.chars().count())
    }
}
