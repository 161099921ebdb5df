use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use sync_markers::{run, SyncConfig};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("sync_markers")
        .version("0.1.0")
        .about("Splices marked blocks from a canonical source file into target files")
        .arg(
            Arg::new("source")
                .long("source")
                .num_args(1)
                .default_value("common.sh")
                .help("Canonical source file holding the marker blocks"),
        )
        .arg(
            Arg::new("target_dir")
                .long("target-dir")
                .action(clap::ArgAction::Append)
                .help("Directory scanned for target files (repeatable; defaults to scripts and extras)"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .action(clap::ArgAction::Append)
                .help("Marker name to synchronize (repeatable; defaults to LOCKFILE and ISSTARTEDBYSYSTEM)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let source_file = PathBuf::from(matches.get_one::<String>("source").unwrap());
    let markers: Vec<String> = match matches.get_many::<String>("marker") {
        Some(values) => values.cloned().collect(),
        None => vec!["LOCKFILE".to_string(), "ISSTARTEDBYSYSTEM".to_string()],
    };
    let target_dirs: Vec<PathBuf> = match matches.get_many::<String>("target_dir") {
        Some(values) => values.map(PathBuf::from).collect(),
        None => vec![PathBuf::from("scripts"), PathBuf::from("extras")],
    };
    let verbose = *matches.get_one::<bool>("verbose").unwrap();

    let config = SyncConfig {
        markers,
        target_dirs,
        source_file,
        verbose,
    };
    run(&config)
}
