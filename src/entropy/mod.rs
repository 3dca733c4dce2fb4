//! Secure random source.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Any generator fit for credential material.
pub trait SecureRng: RngCore + CryptoRng {}

impl<R: RngCore + CryptoRng + ?Sized> SecureRng for R {}

/// Handle to the operating system CSPRNG (`getrandom`).
#[inline]
pub fn os_rng() -> OsRng {
    OsRng
}

/// Name of the entropy source, for diagnostics.
pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}
