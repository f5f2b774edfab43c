use std::io;

use crate::file::FileHandle;

/// Scoped ownership of an open [`FileHandle`].
///
/// Dropping the guard closes the handle unless [`HandleGuard::close`] already
/// ran. The explicit close counts as the close even when it fails, so a
/// descriptor the backend may have released is never closed a second time.
#[derive(Debug)]
pub struct HandleGuard<H: FileHandle> {
    handle: H,
    closed: bool,
}

impl<H: FileHandle> HandleGuard<H> {
    pub fn new(handle: H) -> Self {
        Self { handle, closed: false }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        self.handle.write_at(buf, offset)
    }

    pub fn sync(&mut self) -> io::Result<()> {
        self.handle.sync()
    }

    pub fn size(&mut self) -> io::Result<u64> {
        self.handle.size()
    }

    /// Closes the handle and returns the backend's verdict.
    pub fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        self.handle.close()
    }

    /// Removes the file. Must follow a successful [`HandleGuard::close`].
    pub fn remove(&mut self) -> io::Result<()> {
        debug_assert!(self.closed, "remove called on an open handle");
        self.handle.remove()
    }
}

impl<H: FileHandle> Drop for HandleGuard<H> {
    fn drop(&mut self) {
        if !self.closed {
            // The caller is already returning an earlier error; that one wins.
            let _ = self.handle.close();
        }
    }
}
