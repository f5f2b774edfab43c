//! # Random Byte Supply
//!
//! Every overwrite pass is filled from an [`Entropy`] source. Production code
//! uses [`OsEntropy`], which draws directly from the operating system's
//! cryptographically secure generator (`getrandom` on Linux, `BCryptGenRandom`
//! on Windows). A seeded or statistical generator must never be plugged in
//! here: if the overwrite pattern can be predicted, the original bytes can be
//! reasoned about from whatever residue the device keeps.

use std::io;

use rand::TryRngCore;
use rand::rngs::OsRng;

/// A source of bytes for overwrite passes.
pub trait Entropy {
    /// Fills the whole of `buf`, or fails without a partial guarantee.
    ///
    /// # Errors
    /// Returns the generator's failure converted into an [`io::Error`].
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        OsRng.try_fill_bytes(buf).map_err(io::Error::other)
    }
}
