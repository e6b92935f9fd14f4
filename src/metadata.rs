//! EXIF capture-timestamp extraction.
//!
//! Values are returned as the raw ASCII strings from the file
//! ("YYYY:MM:DD HH:MM:SS"), not `display_value()` renderings, so they stay
//! byte-comparable with mtime-derived stamps.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Exif, In, Reader, Tag, Value};

use crate::error::SortError;
use crate::probe::MediaKind;

pub struct CaptureStamps {
    pub original: String,
    pub digitized: Option<String>,
}

/// Pull DateTimeOriginal / DateTimeDigitized out of a probed file.
///
/// Fails with one of the closed per-file conditions the scanner dispatches
/// on: `UnsupportedSubtype` for image kinds we cannot introspect,
/// `UnreadableFormat` when the container will not parse, `MissingField`
/// when there is no usable capture timestamp.
pub fn read_capture_stamps(path: &Path, kind: MediaKind) -> Result<CaptureStamps, SortError> {
    if kind.is_unsupported_image() {
        return Err(SortError::UnsupportedSubtype {
            path: path.to_path_buf(),
            kind: kind.name(),
        });
    }

    let f = File::open(path).map_err(|e| SortError::fs("open", path, e))?;
    let mut reader = BufReader::new(f);
    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        // A well-formed JPEG with no Exif segment at all.
        Err(exif::Error::NotFound(_)) => {
            return Err(SortError::MissingField {
                path: path.to_path_buf(),
            })
        }
        Err(exif::Error::Io(e)) => return Err(SortError::fs("read", path, e)),
        Err(_) => {
            return Err(SortError::UnreadableFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let original = ascii_field(&exif, Tag::DateTimeOriginal).ok_or_else(|| {
        SortError::MissingField {
            path: path.to_path_buf(),
        }
    })?;
    let digitized = ascii_field(&exif, Tag::DateTimeDigitized);

    Ok(CaptureStamps {
        original,
        digitized,
    })
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref v) if !v.is_empty() => {
            let s = String::from_utf8_lossy(&v[0]);
            let s = s.trim_end_matches('\0').trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }
        _ => None,
    }
}
