//! # Shred Orchestrator
//!
//! Destroys a file by overwriting its bytes with several passes of random
//! data, syncing each pass to stable storage, and only then closing and
//! unlinking it. The algorithm only ever talks to a [`FileHandle`] produced
//! by an injected opener, so it runs unchanged against the real filesystem
//! ([`shred_file`]) or any substitute.
//!
//! ## Sequence
//!
//! 1. `open(path)`; on failure nothing else happens
//! 2. `size()`, queried once; every pass covers exactly that many bytes
//! 3. per pass: refill the buffer from the entropy source, `write_at(buf, 0)`, `sync()`
//! 4. `close()`, whose result is checked
//! 5. `remove()`
//!
//! The first failure aborts the sequence and is returned tagged with its
//! [`Stage`](crate::error::Stage). An open handle is still closed when the
//! function unwinds early, through [`HandleGuard`].
//!
//! ## Limitations
//!
//! The file is assumed to be exclusively owned for the duration of the call;
//! a concurrent resize is not detected. Flash wear-leveling, filesystem
//! journals and snapshots may retain copies this cannot reach.

use std::io;
use std::path::Path;

use crate::config::PASS_OFFSET;
use crate::entropy::{Entropy, OsEntropy};
use crate::error::ShredError;
use crate::file::{FileHandle, HandleGuard, RealFile};
use crate::types::{ShredOptions, Summary};

/// Runs shred sequences with a fixed policy and random source.
#[derive(Debug, Clone)]
pub struct Shredder<E = OsEntropy> {
    options: ShredOptions,
    entropy: E,
}

impl Shredder<OsEntropy> {
    #[must_use]
    pub fn new(options: ShredOptions) -> Self {
        Self { options, entropy: OsEntropy }
    }
}

impl Default for Shredder<OsEntropy> {
    fn default() -> Self {
        Self::new(ShredOptions::default())
    }
}

impl<E: Entropy> Shredder<E> {
    /// Uses `entropy` to fill pass buffers. It must be a cryptographically secure source.
    pub fn with_entropy(options: ShredOptions, entropy: E) -> Self {
        Self { options, entropy }
    }

    #[inline]
    pub fn options(&self) -> ShredOptions {
        self.options
    }

    /// Overwrites and removes the file at `path`, opened through `open`.
    ///
    /// # Errors
    /// Returns the first failure, tagged with the stage it came from. When
    /// an error is returned the file may be partially overwritten and still
    /// present on disk.
    pub fn shred<H, O>(&mut self, path: &Path, open: O) -> Result<Summary, ShredError>
    where
        H: FileHandle,
        O: FnOnce(&Path) -> io::Result<H>,
    {
        let handle = open(path).map_err(ShredError::Open)?;
        let mut guard = HandleGuard::new(handle);

        let size = guard.size().map_err(ShredError::Stat)?;
        let len = usize::try_from(size)
            .map_err(|_| ShredError::Stat(io::Error::new(io::ErrorKind::FileTooLarge, format!("{size} bytes do not fit in memory"))))?;

        let passes = self.options.passes().get();
        let mut buf = vec![0u8; len];

        for pass in 1..=passes {
            self.entropy.fill(&mut buf).map_err(|source| ShredError::Entropy { pass, source })?;

            let written = guard.write_at(&buf, PASS_OFFSET).map_err(|source| ShredError::Write { pass, source })?;
            if written != len {
                let source = io::Error::new(io::ErrorKind::WriteZero, format!("wrote {written} of {len} bytes"));
                return Err(ShredError::Write { pass, source });
            }

            guard.sync().map_err(|source| ShredError::Sync { pass, source })?;
        }

        guard.close().map_err(ShredError::Close)?;
        guard.remove().map_err(ShredError::Remove)?;

        Ok(Summary { passes, bytes: size })
    }
}

/// Shreds `path` through `open` with the default pass count and the OS random source.
///
/// # Errors
/// See [`Shredder::shred`].
pub fn shred<H, O>(path: &Path, open: O) -> Result<Summary, ShredError>
where
    H: FileHandle,
    O: FnOnce(&Path) -> io::Result<H>,
{
    Shredder::default().shred(path, open)
}

/// Shreds a file on the real filesystem with default options.
///
/// # Errors
/// See [`Shredder::shred`].
pub fn shred_file(path: impl AsRef<Path>) -> Result<Summary, ShredError> {
    shred(path.as_ref(), RealFile::open)
}
