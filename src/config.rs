//! Global Configuration Constants
//!
//! Parameters shared by the shredding core and the command line front end.
//! Runtime overrides (currently only the pass count) travel through
//! [`crate::types::ShredOptions`]; everything here is fixed at compile time.

/// Application name used in user interfaces and log output
pub const APP_NAME: &str = "shredder";

/// Number of overwrite passes performed when the caller does not choose one
///
/// Each pass replaces the whole file with fresh random bytes and is synced to
/// stable storage before the next one starts. Three passes keep the runtime
/// bounded for large files while never leaving a single unsynced overwrite.
pub const DEFAULT_PASSES: u32 = 3;

/// Upper bound accepted by the command line parser for `--passes`
///
/// The library itself accepts any positive count; the cap only protects
/// interactive users from a typo turning into hours of disk traffic.
pub const MAX_PASSES: u32 = 35;

/// Offset every pass writes from
///
/// Passes always cover the file from its first byte to its recorded size.
pub const PASS_OFFSET: u64 = 0;
