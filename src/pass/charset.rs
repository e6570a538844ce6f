//! Character pool building for password generation.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Printable ASCII, space through tilde.
const PRINTABLE: std::ops::RangeInclusive<u8> = b' '..=b'~';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolMode {
    /// Letters and digits, 62 symbols.
    Alphanumeric,
    /// All 95 printable ASCII symbols including space.
    Extended,
}

impl PoolMode {
    pub fn describe(self) -> &'static str {
        match self {
            PoolMode::Alphanumeric => "letters and numbers",
            PoolMode::Extended => "letters, numbers and special characters",
        }
    }
}

/// The alphabet passwords are drawn from.
///
/// Only the order of the symbols ever changes after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct CharacterPool {
    symbols: Vec<u8>,
}

impl CharacterPool {
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub(super) fn symbols_mut(&mut self) -> &mut [u8] {
        &mut self.symbols
    }

    pub fn as_str(&self) -> &str {
        // Every constructor only inserts printable ASCII.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharacterPool({} symbols)", self.symbols.len())
    }
}

/// Build the pool for `mode` in its canonical order.
pub fn build(mode: PoolMode) -> CharacterPool {
    let symbols = match mode {
        PoolMode::Alphanumeric => {
            let mut chars = Vec::with_capacity(62);
            chars.extend_from_slice(LOWERCASE);
            chars.extend_from_slice(UPPERCASE);
            chars.extend_from_slice(DIGITS);
            chars
        }
        PoolMode::Extended => PRINTABLE.collect(),
    };
    CharacterPool { symbols }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn contains(pool: &CharacterPool, c: char) -> bool {
        c.is_ascii() && pool.symbols().contains(&(c as u8))
    }

    #[test]
    fn alphanumeric_pool() {
        let pool = build(PoolMode::Alphanumeric);
        assert_eq!(pool.symbols().len(), 62);
        assert_eq!(
            pool.as_str(),
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
        );
    }

    #[test]
    fn extended_pool_is_printable_ascii_in_order() {
        let pool = build(PoolMode::Extended);
        assert_eq!(pool.symbols().len(), 95);
        assert_eq!(pool.symbols().first(), Some(&b' '));
        assert_eq!(pool.symbols().last(), Some(&b'~'));
        assert!(pool.symbols().windows(2).all(|w| w[0] + 1 == w[1]));
        assert!(pool.symbols().iter().all(|b| b.is_ascii_graphic() || *b == b' '));
    }

    #[test]
    fn pools_have_unique_symbols() {
        for mode in [PoolMode::Alphanumeric, PoolMode::Extended] {
            let pool = build(mode);
            let unique: HashSet<_> = pool.symbols().iter().collect();
            assert_eq!(unique.len(), pool.symbols().len());
        }
    }

    #[test]
    fn build_is_pure() {
        for mode in [PoolMode::Alphanumeric, PoolMode::Extended] {
            assert_eq!(build(mode), build(mode));
        }
    }

    #[test]
    fn extended_contains_alphanumeric() {
        let extended = build(PoolMode::Extended);
        let alnum = build(PoolMode::Alphanumeric);
        assert!(alnum.as_str().chars().all(|c| contains(&extended, c)));
        assert!(!contains(&alnum, '!'));
        assert!(!contains(&extended, 'é'));
    }
}
