//! Error taxonomy for the whole pipeline.
//!
//! The first three variants are expected per-file conditions; the scanner
//! consumes them to pick a classification branch and they never abort the
//! batch. The remaining variants are fatal to the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The file probed as a JPEG but its container could not be parsed.
    #[error("unreadable image container: {}", path.display())]
    UnreadableFormat { path: PathBuf },

    /// A parseable image that carries no DateTimeOriginal field.
    #[error("no capture timestamp in {}", path.display())]
    MissingField { path: PathBuf },

    /// A recognized image subtype the extractor cannot introspect.
    #[error("unsupported image subtype {kind}: {}", path.display())]
    UnsupportedSubtype { path: PathBuf, kind: &'static str },

    /// Content sniffing produced nothing we can name a file after.
    #[error("unknown content type: {}", path.display())]
    UnknownContentType { path: PathBuf },

    /// Verify mode found a copy whose bytes differ from its source.
    #[error("copied bytes do not match source: {}", path.display())]
    CopyMismatch { path: PathBuf },

    /// Any filesystem-level failure. Aborts the run; partial renumbering
    /// on retry would be unsafe.
    #[error("{op} failed for {}: {source}", path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> SortError {
        SortError::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}
