//! Password generation.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::charset::{self, CharClass};
use super::error::{Error, Result};
use crate::entropy::{self, SecureRng};

/// Shortest length that can hold one character of every class.
pub const MIN_LENGTH: usize = CharClass::ALL.len();

/// Longest password we will build (1 MiB).
pub const MAX_LENGTH: usize = 1 << 20;

/// Generate a password of `length` characters from the OS CSPRNG.
///
/// The result always holds at least one lowercase letter, uppercase letter,
/// digit and symbol. Fails with [`Error::InvalidArgument`] when `length` is
/// below [`MIN_LENGTH`] and with [`Error::TooLong`] above [`MAX_LENGTH`].
pub fn generate_password(length: usize) -> Result<String> {
    generate_with(length, &mut entropy::os_rng())
}

/// Same as [`generate_password`], drawing from a caller-supplied secure RNG.
pub fn generate_with<R: SecureRng + ?Sized>(length: usize, rng: &mut R) -> Result<String> {
    if length < MIN_LENGTH {
        return Err(Error::InvalidArgument {
            length,
            min: MIN_LENGTH,
        });
    }
    if length > MAX_LENGTH {
        return Err(Error::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }

    let pool = charset::pool();
    debug!("generating {length} chars from a {} char pool", pool.len());

    let mut buf = Vec::with_capacity(length);
    buf.extend(CharClass::ALL.iter().map(|class| random_char(class.chars(), rng)));
    buf.extend((MIN_LENGTH..length).map(|_| random_char(&pool, rng)));

    // Seeds sit at the front until here.
    buf.shuffle(rng);

    let password = buf.iter().map(|&b| char::from(b)).collect();
    buf.zeroize();
    Ok(password)
}

#[inline]
fn random_char<R: SecureRng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}
