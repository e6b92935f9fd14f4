//! spec and manage utility options

use std::path::PathBuf;

use clap::{App, Arg};

/// store option selections parsed by args_to_opts()
pub struct Options {
    pub src_dir: PathBuf,
    pub sorted_dir: PathBuf,
    pub untagged_dir: PathBuf,
    pub dry_run: bool,
    pub verify: bool,
}

pub fn args_to_opts() -> Options {
    let app = App::new("picsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "picsort is a utility to grab a flat pile of photo and movie \n\
             files and copy them into a destination directory, renamed \n\
             sequentially by capture timestamp",
        )
        .arg(
            Arg::with_name("src")
                .value_name("SRC_DIR")
                .help("source directory to scan (flat, non-recursive)")
                .required(true),
        )
        .arg(
            Arg::with_name("sorted")
                .value_name("SORTED_DIR")
                .help("destination directory for renamed files")
                .required(true),
        )
        .arg(
            Arg::with_name("untagged")
                .short("u")
                .long("untagged")
                .value_name("UNTAGGED_DIR")
                .takes_value(true)
                .help("holding directory for files without usable metadata (default: SORTED_DIR/untagged)"),
        )
        .arg(
            Arg::with_name("dry_run")
                .short("n")
                .long("dry-run")
                .help("classify and plan only, copy nothing"),
        )
        .arg(
            Arg::with_name("verify")
                .short("c")
                .long("verify")
                .help("re-hash each copy and compare against its source"),
        );

    let amats = app.get_matches();

    let src_dir = PathBuf::from(amats.value_of("src").expect("missing value"));
    let sorted_dir = PathBuf::from(amats.value_of("sorted").expect("missing value"));
    let untagged_dir = match amats.value_of("untagged") {
        Some(u) => PathBuf::from(u),
        None => sorted_dir.join("untagged"),
    };

    Options {
        src_dir,
        sorted_dir,
        untagged_dir,
        dry_run: amats.is_present("dry_run"),
        verify: amats.is_present("verify"),
    }
}
