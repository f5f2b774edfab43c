//! Shredder - secure single-file destruction.
//!
//! Overwrites a file in place with several passes of cryptographically
//! secure random bytes, forces every pass to stable storage, then closes and
//! unlinks it:
//! - [`shred::Shredder`] drives the overwrite/sync/close/remove sequence
//! - [`file::FileHandle`] is the capability it drives, with [`file::RealFile`] as the OS backend
//! - [`entropy::Entropy`] supplies the random pass data, [`entropy::OsEntropy`] in production
//! - [`error::ShredError`] names the stage every failure came from

pub mod config;
pub mod entropy;
pub mod error;
pub mod file;
pub mod shred;
pub mod types;

pub use error::{ShredError, Stage};
pub use shred::{Shredder, shred, shred_file};
pub use types::{ShredOptions, Summary};
