//! Final console report: mismatch listing plus labeled counters.

use crate::scan::{Flag, ScanOutcome};

pub fn print_report(out: &ScanOutcome) {
    for rec in out.photos.iter() {
        if rec.has_flag(Flag::TimestampMismatch) {
            println!("Timestamp mismatch on file {}", rec.full_path.display());
        }
    }

    let c = &out.counters;
    println!("Processed: {}", c.processed);
    println!("Movie Files: {}", c.movies);
    println!("Valid Metadata: {}", c.metadata_valid);
    println!("Invalid Metadata: {}", c.metadata_invalid);
    println!("Untagged: {}", c.untagged);
}
