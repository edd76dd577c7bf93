use crate::staging::Staging;

/// Prints every staged file path to stdout.
pub fn run(staging: &Staging) -> Result<(), String> {
    if !staging.exists() {
        return Err(String::from("lcp: nothing to list"));
    }

    for file in staging.files()? {
        println!("{}", file.display());
    }

    Ok(())
}
