//! Password generation.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::charset::CharacterPool;
use super::password::Password;

/// Generate a password of `length` characters drawn from `pool`.
///
/// With `shuffle` set, the whole pool is reshuffled before every character
/// and one symbol is then picked from the fresh order. That costs
/// `length * pool size` work and buys nothing over a plain uniform pick;
/// it is the documented default and must stay selectable. Without `shuffle`
/// each character is a uniform pick from the pool as given.
///
/// `rand`'s uniform sampler and shuffle both resample instead of reducing
/// modulo, so neither path is biased.
pub fn generate<R>(pool: &mut CharacterPool, length: usize, shuffle: bool, rng: &mut R) -> Password
where
    R: Rng + CryptoRng,
{
    let mut pass = Password::with_capacity(length);

    if shuffle {
        log::info!("pool shuffle is enabled.");
        for _ in 0..length {
            pool.symbols_mut().shuffle(rng);
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("pool shuffled > [ {} ]", pool);
            } else {
                log::info!("pool shuffled");
            }
            pass.push(random_char(pool, rng));
        }
    } else {
        log::info!("pool shuffle is disabled");
        for _ in 0..length {
            pass.push(random_char(pool, rng));
        }
    }

    pass
}

#[inline]
fn random_char<R: Rng + CryptoRng>(pool: &CharacterPool, rng: &mut R) -> char {
    let symbols = pool.symbols();
    symbols[rng.gen_range(0..symbols.len())] as char
}
