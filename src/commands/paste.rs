use std::env;

use crate::copier;
use crate::staging::Staging;

/// Merges the staged content into the current working directory.
///
/// Same-named files are overwritten with the staged content; everything else
/// already present in the working directory is left alone.
pub fn run(staging: &Staging, quiet: bool) -> Result<(), String> {
    if !staging.exists() {
        return Err(String::from("lcp: nothing to paste"));
    }

    let cwd = env::current_dir()
        .map_err(|e| format!("lcp: cannot determine working directory: {e}"))?;

    copier::copy(staging.dir(), &cwd)?;

    if !quiet {
        eprintln!("pasted");
    }

    Ok(())
}
