use crate::staging::Staging;

/// Deletes the staging directory. Succeeds when nothing is staged.
pub fn run(staging: &Staging, quiet: bool) -> Result<(), String> {
    staging.clear()?;

    if !quiet {
        eprintln!("cleared");
    }

    Ok(())
}
