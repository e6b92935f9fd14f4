//! Scanner: walks the flat source directory, probes and classifies every
//! regular file, and returns the buckets plus counters as one accumulator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ignore::WalkBuilder;

use crate::actions;
use crate::error::SortError;
use crate::metadata;
use crate::options::Options;
use crate::probe::{self, MediaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    TimestampMismatch,
    UsedFileMtime,
    MovieFile,
}

#[derive(Debug)]
pub struct FileRecord {
    pub full_path: PathBuf,
    /// Always "YYYY:MM:DD HH:MM:SS", from exif or formatted from mtime.
    pub capture_timestamp: String,
    pub kind: MediaKind,
    pub flags: Vec<Flag>,
    pub destination_path: Option<PathBuf>,
}

impl FileRecord {
    fn new(path: &Path, capture_timestamp: String, kind: MediaKind) -> FileRecord {
        FileRecord {
            full_path: path.to_path_buf(),
            capture_timestamp,
            kind,
            flags: Vec::new(),
            destination_path: None,
        }
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}

#[derive(Debug, Default)]
pub struct Counters {
    pub processed: u32,
    pub movies: u32,
    pub metadata_valid: u32,
    pub metadata_invalid: u32,
    pub untagged: u32,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub photos: Vec<FileRecord>,
    pub videos: Vec<FileRecord>,
    pub counters: Counters,
}

/// Walk the source directory (flat, no recursion) and classify each file.
///
/// Every regular file ends up either as exactly one record in a bucket or
/// as a verbatim copy in the untagged directory.
pub fn scan_source(opts: &Options) -> Result<ScanOutcome, SortError> {
    let mut out = ScanOutcome::default();

    // Standard filters would skip dotfiles and honor ignore files; the
    // source is a plain media pile and every regular file must be seen.
    let walk = WalkBuilder::new(&opts.src_dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .build();
    for res in walk {
        let entry = match res {
            Ok(e) => e,
            Err(e) => return Err(walk_error(&opts.src_dir, e)),
        };
        if let Some(ft) = entry.file_type() {
            if ft.is_file() {
                classify(entry.path(), opts, &mut out)?;
            }
        }
    }

    Ok(out)
}

fn classify(path: &Path, opts: &Options, out: &mut ScanOutcome) -> Result<(), SortError> {
    out.counters.processed += 1;

    let kind = probe::probe_file(path)?;
    match kind {
        MediaKind::QuickTime => {
            println!("Movie file found: {}", path.display());
            let mut rec = FileRecord::new(path, mtime_stamp(path)?, kind);
            rec.flags.push(Flag::MovieFile);
            out.counters.movies += 1;
            out.videos.push(rec);
        }
        MediaKind::Unknown => {
            eprintln!(
                "Unknown content type, copying untouched: {}",
                path.display()
            );
            actions::copy_untagged(path, &opts.untagged_dir, opts.dry_run)?;
            out.counters.untagged += 1;
        }
        _ => match metadata::read_capture_stamps(path, kind) {
            Ok(stamps) => {
                let mut rec = FileRecord::new(path, stamps.original, kind);
                if let Some(digitized) = stamps.digitized {
                    if digitized != rec.capture_timestamp {
                        rec.flags.push(Flag::TimestampMismatch);
                    }
                }
                out.counters.metadata_valid += 1;
                out.photos.push(rec);
            }
            Err(SortError::MissingField { .. }) => {
                println!(
                    "No exif metadata found, using file metadata: {}",
                    path.display()
                );
                mtime_fallback(path, kind, out)?;
            }
            Err(SortError::UnreadableFormat { .. }) => {
                println!(
                    "Unreadable image metadata, using file metadata: {}",
                    path.display()
                );
                mtime_fallback(path, kind, out)?;
            }
            Err(SortError::UnsupportedSubtype { .. }) => {
                println!("Unsupported filetype: {}", path.display());
                actions::copy_untagged(path, &opts.untagged_dir, opts.dry_run)?;
                out.counters.metadata_invalid += 1;
                out.counters.untagged += 1;
            }
            Err(e) => return Err(e),
        },
    }

    Ok(())
}

fn mtime_fallback(path: &Path, kind: MediaKind, out: &mut ScanOutcome) -> Result<(), SortError> {
    let mut rec = FileRecord::new(path, mtime_stamp(path)?, kind);
    rec.flags.push(Flag::UsedFileMtime);
    out.counters.metadata_invalid += 1;
    out.photos.push(rec);
    Ok(())
}

/// Attribute a walk failure to the entry that caused it when the error
/// names one, falling back to the source directory.
fn walk_error(src_dir: &Path, err: ignore::Error) -> SortError {
    let path = match &err {
        ignore::Error::WithPath { path, .. } => path.clone(),
        _ => src_dir.to_path_buf(),
    };
    SortError::fs("walk", path, io::Error::new(io::ErrorKind::Other, err))
}

/// Filesystem mtime formatted like an exif capture timestamp.
pub fn mtime_stamp(path: &Path) -> Result<String, SortError> {
    let md = fs::metadata(path).map_err(|e| SortError::fs("stat", path, e))?;
    let mtime = md.modified().map_err(|e| SortError::fs("stat", path, e))?;
    Ok(DateTime::<Local>::from(mtime)
        .format("%Y:%m:%d %H:%M:%S")
        .to_string())
}
