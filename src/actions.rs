//! Copy-side actions: hashing, metadata-preserving copies, and the
//! sort-and-rename pass over a scanned bucket.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use filetime::FileTime;
use sha2::{Digest, Sha256};

use crate::error::SortError;
use crate::options::Options;
use crate::scan::FileRecord;

pub fn hash_file(path: &Path) -> Result<Vec<u8>, SortError> {
    let mut h = Sha256::new();

    let mut buf = [0u8; 4096];
    let mut f = File::open(path).map_err(|e| SortError::fs("open", path, e))?;
    loop {
        let nbytes = f.read(&mut buf).map_err(|e| SortError::fs("read", path, e))?;
        if nbytes == 0 {
            break;
        }
        h.update(&buf[0..nbytes]);
    }

    Ok(h.finalize().to_vec())
}

/// Copy a file keeping its permission bits and its access/modification
/// times, like a `copy2` rather than a bare byte copy.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> Result<(), SortError> {
    let md = fs::metadata(src).map_err(|e| SortError::fs("stat", src, e))?;
    fs::copy(src, dst).map_err(|e| SortError::fs("copy", dst, e))?;

    let atime = FileTime::from_last_access_time(&md);
    let mtime = FileTime::from_last_modification_time(&md);
    filetime::set_file_times(dst, atime, mtime)
        .map_err(|e| SortError::fs("set file times", dst, e))?;
    Ok(())
}

/// Compare a copy against its source by content hash.
pub fn verify_copy(src: &Path, dst: &Path) -> Result<(), SortError> {
    if hash_file(src)? != hash_file(dst)? {
        return Err(SortError::CopyMismatch {
            path: dst.to_path_buf(),
        });
    }
    Ok(())
}

/// Verbatim copy into the untagged holding directory, original name kept.
pub fn copy_untagged(src: &Path, untagged_dir: &Path, dry_run: bool) -> Result<(), SortError> {
    let name = src.file_name().ok_or_else(|| {
        SortError::fs(
            "copy",
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "no file name"),
        )
    })?;
    let dst = untagged_dir.join(name);

    if dry_run {
        println!("(dry run) {} -> {}", src.display(), dst.display());
        return Ok(());
    }

    fs::create_dir_all(untagged_dir)
        .map_err(|e| SortError::fs("create dir", untagged_dir, e))?;
    copy_with_metadata(src, &dst)
}

/// Stable-sort a bucket ascending by capture timestamp and copy each record
/// into the sorted directory under a sequential zero-padded name.
///
/// Numbering restarts at 0 per bucket; photo and video buckets cannot
/// collide because their output extensions are disjoint.
pub fn sort_and_copy(bucket: &mut Vec<FileRecord>, opts: &Options) -> Result<(), SortError> {
    bucket.sort_by(|a, b| a.capture_timestamp.cmp(&b.capture_timestamp));

    for (counter, rec) in bucket.iter_mut().enumerate() {
        let ext = rec
            .kind
            .extension()
            .ok_or_else(|| SortError::UnknownContentType {
                path: rec.full_path.clone(),
            })?;
        let dst = opts.sorted_dir.join(format!("IMG_{:04}.{}", counter, ext));

        if opts.dry_run {
            println!("(dry run) {} -> {}", rec.full_path.display(), dst.display());
        } else {
            println!("Copying to {}", dst.display());
            copy_with_metadata(&rec.full_path, &dst)?;
            if opts.verify {
                verify_copy(&rec.full_path, &dst)?;
            }
        }

        rec.destination_path = Some(dst);
    }

    Ok(())
}
