//! Search-path lookup: implements `PathLookup` with the `which` crate.

use std::path::PathBuf;

use crate::application::ports::PathLookup;

/// Looks executables up on `PATH` (honouring `PATHEXT` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct WhichLookup;

impl PathLookup for WhichLookup {
    fn which(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}
