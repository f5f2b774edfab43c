//! File capability used by the shredder.
//!
//! [`FileHandle`] is the seam between the overwrite algorithm and the
//! filesystem: [`real::RealFile`] talks to the operating system, while tests
//! plug in an in-memory handle that records every call.

pub mod guard;
#[cfg(test)]
pub(crate) mod memory;
pub mod real;

use std::io;

pub use guard::HandleGuard;
pub use real::{RealFile, open_file};

/// The operations the shredder needs on one open, writable file.
///
/// Implementations are owned exclusively by a single shred call and are
/// dropped when it returns.
pub trait FileHandle {
    /// Writes all of `buf` starting at byte `offset`, returning the number of bytes written.
    ///
    /// # Errors
    /// Returns the backend's error if the buffer could not be written in full.
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize>;

    /// Forces previously written bytes to stable storage.
    ///
    /// # Errors
    /// Returns the backend's error if the flush did not complete.
    fn sync(&mut self) -> io::Result<()>;

    /// Current length of the file in bytes.
    ///
    /// # Errors
    /// Returns the backend's error if metadata could not be read.
    fn size(&mut self) -> io::Result<u64>;

    /// Releases the handle. Closing an already closed handle is a no-op.
    ///
    /// # Errors
    /// Returns the backend's error if the release failed.
    fn close(&mut self) -> io::Result<()>;

    /// Deletes the file's directory entry. Only called once the handle is closed.
    ///
    /// # Errors
    /// Returns the backend's error if the entry could not be removed.
    fn remove(&mut self) -> io::Result<()>;
}
