//! `getnew`: move the Nth newest file from a source directory here.
//!
//! The source directory comes from `--source`, then `GETNEW_SOURCE_DIR`, then
//! `~/Downloads`. On success the moved file name is printed to stdout.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use getnew::config::GetnewConfig;
use getnew::exit_codes;
use getnew::fetch::{move_selected, unarchive};
use getnew::io::process::InheritedInvoker;
use getnew::logging;

#[derive(Parser, Debug)]
#[command(
    name = "getnew",
    version,
    about = "Move the nth newest file from a source directory to the current directory",
    long_about = "Looks in a source directory for the nth newest file and moves it to the \
current directory. By default the newest file is moved.\n\n\
The source directory is taken from --source, then the GETNEW_SOURCE_DIR environment \
variable, then ~/Downloads.\n\n\
Optionally provide a filter to match file names partially (case-insensitive)."
)]
struct Cli {
    /// Only consider files whose name contains this text (case-insensitive).
    filter: Option<String>,

    /// Source directory (overrides GETNEW_SOURCE_DIR).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Nth newest file to move (1 is the newest).
    #[arg(short, long, default_value = "1")]
    nth: NonZeroUsize,

    /// Unarchive the first archive in the current directory after moving (zip, gz, tgz, tar, 7z).
    #[arg(short = 'z', long)]
    unarchive: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    logging::init();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GetnewConfig::load(cli.source, cli.filter, cli.nth, cli.unarchive)?;

    let moved = move_selected(&config)?;
    println!("{}", moved.file_name.to_string_lossy());

    if config.unarchive {
        let extracted = unarchive(&config, &InheritedInvoker, &moved)?;
        eprintln!(
            "Unarchived and removed: {}",
            extracted.archive.to_string_lossy()
        );
    }
    Ok(())
}
