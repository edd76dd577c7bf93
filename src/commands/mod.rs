pub mod clear;
pub mod copy;
pub mod list;
pub mod paste;

/// The mutually exclusive invocation mode selected by flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Copy,
    Paste,
    List,
    Clear,
}

impl Mode {
    /// Picks the mode from the raw flags.
    ///
    /// Clear and list take precedence; otherwise exactly one of copy and
    /// paste must be set. Runs before any config or filesystem access, so a
    /// conflicting invocation fails without side effects.
    pub fn select(copy: bool, paste: bool, list: bool, clear: bool) -> Result<Self, String> {
        if clear {
            return Ok(Self::Clear);
        }

        if list {
            return Ok(Self::List);
        }

        match (copy, paste) {
            (true, true) => {
                Err(String::from("lcp: copy and paste flags cannot be set at the same time"))
            }
            (true, false) => Ok(Self::Copy),
            (false, true) => Ok(Self::Paste),
            (false, false) => Err(String::from("lcp: must use either copy or paste flags")),
        }
    }
}
