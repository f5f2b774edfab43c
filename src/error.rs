use std::io;

use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// The point in the shred sequence where a failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Open,
    Stat,
    Entropy,
    Write,
    Sync,
    Close,
    Remove,
}

#[derive(Error, Debug)]
pub enum ShredError {
    #[error("cannot open file: {0}")]
    Open(#[source] io::Error),

    #[error("cannot read file size: {0}")]
    Stat(#[source] io::Error),

    #[error("random source failed on pass {pass}: {source}")]
    Entropy {
        pass: u32,
        #[source]
        source: io::Error,
    },

    #[error("write failed on pass {pass}: {source}")]
    Write {
        pass: u32,
        #[source]
        source: io::Error,
    },

    #[error("sync failed on pass {pass}: {source}")]
    Sync {
        pass: u32,
        #[source]
        source: io::Error,
    },

    #[error("cannot close file: {0}")]
    Close(#[source] io::Error),

    #[error("cannot remove file: {0}")]
    Remove(#[source] io::Error),
}

impl ShredError {
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Open(_) => Stage::Open,
            Self::Stat(_) => Stage::Stat,
            Self::Entropy { .. } => Stage::Entropy,
            Self::Write { .. } => Stage::Write,
            Self::Sync { .. } => Stage::Sync,
            Self::Close(_) => Stage::Close,
            Self::Remove(_) => Stage::Remove,
        }
    }

    /// The pass the failure happened on, for the stages that run per pass.
    #[must_use]
    pub fn pass(&self) -> Option<u32> {
        match self {
            Self::Entropy { pass, .. } | Self::Write { pass, .. } | Self::Sync { pass, .. } => Some(*pass),
            _ => None,
        }
    }

    /// Borrows the I/O error exactly as the failing operation returned it.
    #[must_use]
    pub fn io(&self) -> &io::Error {
        match self {
            Self::Open(e) | Self::Stat(e) | Self::Close(e) | Self::Remove(e) => e,
            Self::Entropy { source, .. } | Self::Write { source, .. } | Self::Sync { source, .. } => source,
        }
    }

    #[must_use]
    pub fn into_io(self) -> io::Error {
        match self {
            Self::Open(e) | Self::Stat(e) | Self::Close(e) | Self::Remove(e) => e,
            Self::Entropy { source, .. } | Self::Write { source, .. } | Self::Sync { source, .. } => source,
        }
    }
}
