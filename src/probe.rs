//! Content-type probe.
//!
//! Each file is sniffed once, up front, by magic bytes. Classification and
//! the output extension both dispatch on the resulting `MediaKind`, so no
//! later stage has to guess from file names or error text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SortError;

/// Closed set of content types the scanner dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Jpeg,
    QuickTime,
    Png,
    Gif,
    Bmp,
    Tiff,
    Unknown,
}

impl MediaKind {
    /// Output extension for files that get renamed into a bucket.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            MediaKind::Jpeg => Some("jpg"),
            MediaKind::QuickTime => Some("mov"),
            _ => None,
        }
    }

    /// Image containers we recognize but cannot pull capture metadata from.
    pub fn is_unsupported_image(self) -> bool {
        matches!(
            self,
            MediaKind::Png | MediaKind::Gif | MediaKind::Bmp | MediaKind::Tiff
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            MediaKind::Jpeg => "jpeg",
            MediaKind::QuickTime => "quicktime",
            MediaKind::Png => "png",
            MediaKind::Gif => "gif",
            MediaKind::Bmp => "bmp",
            MediaKind::Tiff => "tiff",
            MediaKind::Unknown => "unknown",
        }
    }
}

// QuickTime files that predate the ftyp box start directly with a top-level
// atom; its type sits at offset 4.
const QT_LEGACY_ATOMS: [&[u8; 4]; 5] = [b"moov", b"mdat", b"wide", b"free", b"pnot"];

/// Sniff a content type from the leading bytes of a file.
pub fn sniff(buf: &[u8]) -> MediaKind {
    if buf.starts_with(&[0xFF, 0xD8]) {
        return MediaKind::Jpeg;
    }
    if buf.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return MediaKind::Png;
    }
    if buf.starts_with(b"GIF8") {
        return MediaKind::Gif;
    }
    if buf.starts_with(b"BM") {
        return MediaKind::Bmp;
    }
    if buf.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || buf.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        return MediaKind::Tiff;
    }
    if buf.len() >= 12 && &buf[4..8] == b"ftyp" {
        // Only the qt brand family is a QuickTime movie; mp4 and friends
        // stay unknown rather than getting a wrong .mov name.
        if &buf[8..10] == b"qt" {
            return MediaKind::QuickTime;
        }
        return MediaKind::Unknown;
    }
    if buf.len() >= 8 {
        let atom = &buf[4..8];
        if QT_LEGACY_ATOMS.iter().any(|a| atom == &a[..]) {
            return MediaKind::QuickTime;
        }
    }
    MediaKind::Unknown
}

/// Read the leading bytes of `path` and sniff them.
pub fn probe_file(path: &Path) -> Result<MediaKind, SortError> {
    let f = File::open(path).map_err(|e| SortError::fs("open", path, e))?;
    let mut head = Vec::with_capacity(16);
    f.take(16)
        .read_to_end(&mut head)
        .map_err(|e| SortError::fs("read", path, e))?;
    Ok(sniff(&head))
}
