use std::io;

use indicatif::{ProgressBar, ProgressStyle};
use shredder::file::FileHandle;

pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.red/white}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
            .expect("valid template")
            .progress_chars("█▓ ");

        bar.set_style(style);
        bar.set_message(description.to_string());

        Self { bar }
    }

    pub fn set_length(&self, total: u64) {
        self.bar.set_length(total);
    }

    pub fn add(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

/// Forwards every call to the wrapped handle and reports progress on the way.
///
/// The bar spans `size * passes` bytes; each sync advances the pass label.
pub struct Tracked<H> {
    inner: H,
    bar: Option<Bar>,
    passes: u32,
    synced: u32,
}

impl<H: FileHandle> Tracked<H> {
    pub fn new(inner: H, bar: Option<Bar>, passes: u32) -> Self {
        Self { inner, bar, passes, synced: 0 }
    }
}

impl<H: FileHandle> FileHandle for Tracked<H> {
    fn write_at(&mut self, buf: &[u8], offset: u64) -> io::Result<usize> {
        let written = self.inner.write_at(buf, offset)?;
        if let Some(bar) = &self.bar {
            bar.add(written as u64);
        }
        Ok(written)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.inner.sync()?;
        self.synced += 1;
        if let Some(bar) = &self.bar
            && self.synced < self.passes
        {
            bar.set_message(&format!("Pass {}/{}", self.synced + 1, self.passes));
        }
        Ok(())
    }

    fn size(&mut self) -> io::Result<u64> {
        let size = self.inner.size()?;
        if let Some(bar) = &self.bar {
            bar.set_length(size.saturating_mul(u64::from(self.passes)));
        }
        Ok(size)
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.close()?;
        if let Some(bar) = &self.bar
            && self.synced == self.passes
        {
            bar.finish();
        }
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        self.inner.remove()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use shredder::file::RealFile;
    use shredder::{ShredOptions, Shredder};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_tracked_counts_every_pass() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tracked.txt");
        fs::write(&path, b"some data").unwrap();

        let mut tracked = Tracked::new(RealFile::open(&path).unwrap(), Some(Bar::new(0, "Pass 1/3")), 3);
        assert_eq!(tracked.size().unwrap(), 9);
        for _ in 0..3 {
            assert_eq!(tracked.write_at(&[0u8; 9], 0).unwrap(), 9);
            tracked.sync().unwrap();
        }

        let bar = tracked.bar.as_ref().unwrap();
        assert_eq!(bar.position(), 27);
        assert_eq!(bar.bar.length(), Some(27));

        tracked.close().unwrap();
        assert!(tracked.bar.as_ref().unwrap().bar.is_finished());
        tracked.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_tracked_without_bar_is_transparent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quiet.txt");
        fs::write(&path, b"some data").unwrap();

        let summary = Shredder::new(ShredOptions::default()).shred(&path, |p| Ok(Tracked::new(RealFile::open(p)?, None, 3))).unwrap();

        assert_eq!(summary.bytes, 9);
        assert!(!path.exists());
    }
}
