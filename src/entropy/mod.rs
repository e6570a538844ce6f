//! Cryptographically secure random source.
//!
//! All randomness comes from the operating system CSPRNG via `OsRng`.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Confirm the OS random source answers before any password work starts.
///
/// `OsRng` panics on failure once sampling is under way, so a broken source
/// has to be caught here.
pub fn probe() -> Result<OsRng> {
    let mut rng = OsRng;
    let mut buf = [0u8; 32];
    let checked = rng.try_fill_bytes(&mut buf);
    buf.zeroize();
    checked.map_err(|e| Error::EntropyUnavailable(e.to_string()))?;
    log::debug!("random source: {}", source_name());
    Ok(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn probe_succeeds_on_host() {
        let mut rng = probe().expect("host has an OS random source");
        let a: u128 = rng.r#gen();
        let b: u128 = rng.r#gen();
        assert_ne!(a, b);
    }
}
