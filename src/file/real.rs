use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::file::FileHandle;

/// A [`FileHandle`] backed by an operating system file opened write-only.
///
/// The path the file was opened with is kept so that [`FileHandle::remove`]
/// unlinks the name the caller asked for rather than whatever the descriptor
/// might point at after a rename.
#[derive(Debug)]
pub struct RealFile {
    file: Option<File>,
    path: PathBuf,
}

impl RealFile {
    /// Opens an existing file for writing only.
    ///
    /// The file is neither created nor truncated, and no read access is
    /// requested: the original content is never read back.
    ///
    /// # Errors
    /// Returns the operating system error if the path is missing, is not a
    /// writable regular file, or permission is denied.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).open(path)?;
        Ok(Self { file: Some(file), path: path.to_path_buf() })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    fn live(&mut self) -> io::Result<&mut File> {
        self.file.as_mut().ok_or_else(|| io::Error::other(format!("file handle already closed: {}", self.path.display())))
    }
}

/// Opener for the real filesystem, suitable for passing to the shredder.
///
/// # Errors
/// See [`RealFile::open`].
pub fn open_file(path: &Path) -> io::Result<RealFile> {
    RealFile::open(path)
}

impl FileHandle for RealFile {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        let file = self.live()?;
        write_all_at(file, buf, offset)?;
        Ok(buf.len())
    }

    fn sync(&mut self) -> io::Result<()> {
        self.live()?.sync_all()
    }

    fn size(&mut self) -> io::Result<u64> {
        Ok(self.live()?.metadata()?.len())
    }

    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(file) => close_descriptor(file),
            None => Ok(()),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        if !self.is_closed() {
            return Err(io::Error::other(format!("refusing to remove an open file: {}", self.path.display())));
        }

        fs::remove_file(&self.path)
    }
}

#[cfg(unix)]
fn write_all_at(file: &File, buf: &[u8], offset: u64) -> io::Result<()> {
    use std::os::unix::fs::FileExt;

    file.write_all_at(buf, offset)
}

#[cfg(windows)]
fn write_all_at(file: &File, mut buf: &[u8], mut offset: u64) -> io::Result<()> {
    use std::os::windows::fs::FileExt;

    while !buf.is_empty() {
        match file.seek_write(buf, offset) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
            Ok(n) => {
                buf = &buf[n..];
                offset += n as u64;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Closes the descriptor and reports what the kernel said, which dropping a
/// [`File`] would silently discard.
#[cfg(unix)]
fn close_descriptor(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();

    // SAFETY: `into_raw_fd` transferred ownership of `fd` to us and nothing else closes it.
    if unsafe { libc::close(fd) } == 0 { Ok(()) } else { Err(io::Error::last_os_error()) }
}

#[cfg(not(unix))]
fn close_descriptor(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
