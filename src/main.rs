use clap::Parser;
use std::path::PathBuf;

use lcp::commands::{self, Mode};
use lcp::config::Config;
use lcp::staging::Staging;

const EXAMPLES: &str = "examples:
  lcp -c Makefile Cargo.toml src/
  lcp -l
  lcp -p -q
  lcp -k";

/// Command-line clipboard for files and directories.
#[derive(Parser, Debug)]
#[command(name = "lcp", version, about, long_about = None, after_help = EXAMPLES)]
struct Args {
    /// Copy the given files and directories into the clipboard
    #[arg(short = 'c', long)]
    copy: bool,
    /// Paste the files you copied into the working directory
    #[arg(short = 'p', long)]
    paste: bool,
    /// Clear the clipboard
    #[arg(short = 'k', long)]
    clear: bool,
    /// List the files in the clipboard
    #[arg(short = 'l', long)]
    list: bool,
    /// Disable informational output
    #[arg(short = 'q', long)]
    quiet: bool,
    /// Files or directories to copy
    paths: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Flag validation happens before the config file or the staging
    // directory is touched.
    let mode = match Mode::select(args.copy, args.paste, args.list, args.clear) {
        Ok(mode) => mode,
        Err(e) => fail(&e),
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let staging = match config.staging_dir() {
        Ok(dir) => Staging::new(dir),
        Err(e) => fail(&e),
    };

    let quiet = args.quiet || config.quiet;

    let result = match mode {
        Mode::Clear => commands::clear::run(&staging, quiet),
        Mode::List => commands::list::run(&staging),
        Mode::Copy => commands::copy::run(&args.paths, &staging, quiet),
        Mode::Paste => commands::paste::run(&staging, quiet),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
