// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Repository configuration
//!
//! The library never reads the environment itself; the binary resolves
//! flags and their `AUTOUPDATE_*` environment fallbacks (see `src/cli.rs`)
//! and hands a [`Config`] in.

use std::path::PathBuf;

use crate::paths::UpdatePaths;

/// Default release data directory, relative to the working directory
pub const DEFAULT_ROOT: &str = "release_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one folder per version
    pub root: PathBuf,
    /// Prefixes used when exposing artifact paths
    pub paths: UpdatePaths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            paths: UpdatePaths::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            paths: UpdatePaths::default(),
        }
    }

    #[must_use]
    pub fn with_paths(mut self, paths: UpdatePaths) -> Self {
        self.paths = paths;
        self
    }
}
