mod actions;
mod error;
#[cfg(test)]
mod fixtures;
mod metadata;
mod options;
mod probe;
mod report;
mod scan;

use std::fs::create_dir_all;
use std::process;

use error::SortError;

fn main() {
    if let Err(e) = run() {
        eprintln!("picsort: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SortError> {
    let opts = options::args_to_opts();

    println!("scan {}", opts.src_dir.display());
    if opts.dry_run {
        println!("  dry run, no output\n");
    } else {
        println!("  output to: {}\n", opts.sorted_dir.display());
        create_dir_all(&opts.sorted_dir)
            .map_err(|e| SortError::fs("create dir", &opts.sorted_dir, e))?;
    }

    let mut outcome = scan::scan_source(&opts)?;
    actions::sort_and_copy(&mut outcome.photos, &opts)?;
    actions::sort_and_copy(&mut outcome.videos, &opts)?;
    report::print_report(&outcome);

    Ok(())
}
