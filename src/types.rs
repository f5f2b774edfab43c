//! Common type definitions for the shredder.
//!
//! - [`ShredOptions`]: tunable policy for one shred call
//! - [`Summary`]: what a successful shred did

use std::fmt::{Display, Formatter, Result};
use std::num::NonZeroU32;

use crate::config::DEFAULT_PASSES;

const DEFAULT: NonZeroU32 = match NonZeroU32::new(DEFAULT_PASSES) {
    Some(passes) => passes,
    None => panic!("DEFAULT_PASSES must be positive"),
};

/// Policy for a shred call.
///
/// The pass count is the only knob: how many times the file is overwritten
/// with fresh random bytes before it is unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShredOptions {
    passes: NonZeroU32,
}

impl ShredOptions {
    #[inline]
    #[must_use]
    pub const fn new(passes: NonZeroU32) -> Self {
        Self { passes }
    }

    /// Returns `None` for a pass count of zero.
    #[inline]
    #[must_use]
    pub fn with_passes(passes: u32) -> Option<Self> {
        NonZeroU32::new(passes).map(Self::new)
    }

    #[inline]
    #[must_use]
    pub const fn passes(self) -> NonZeroU32 {
        self.passes
    }
}

impl Default for ShredOptions {
    fn default() -> Self {
        Self::new(DEFAULT)
    }
}

/// Outcome of a completed shred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of write + sync cycles performed.
    pub passes: u32,

    /// Size of the file, i.e. the length of every pass.
    pub bytes: u64,
}

impl Summary {
    /// Total bytes pushed to storage across all passes.
    #[inline]
    #[must_use]
    pub fn bytes_written(self) -> u64 {
        self.bytes.saturating_mul(u64::from(self.passes))
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} bytes overwritten in {} pass(es)", self.bytes, self.passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes() {
        assert_eq!(ShredOptions::default().passes().get(), 3);
    }

    #[test]
    fn test_with_passes_rejects_zero() {
        assert!(ShredOptions::with_passes(0).is_none());
        assert_eq!(ShredOptions::with_passes(7).map(|o| o.passes().get()), Some(7));
    }

    #[test]
    fn test_summary_bytes_written() {
        let summary = Summary { passes: 3, bytes: 1024 };
        assert_eq!(summary.bytes_written(), 3072);
        assert_eq!(summary.to_string(), "1024 bytes overwritten in 3 pass(es)");

        let huge = Summary { passes: 2, bytes: u64::MAX };
        assert_eq!(huge.bytes_written(), u64::MAX);
    }
}
