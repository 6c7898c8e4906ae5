// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error types for version parsing and repository queries

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Strict version parsing failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("version {version:?} has a non-numeric {field} component")]
    MalformedComponent { version: String, field: &'static str },
}

/// Failure of a repository query
///
/// The two not-found variants are expected outcomes of a lookup. `Io` is a
/// fault in the underlying tree (missing root, permission denied) and must be
/// reported as such rather than as absence.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("version not found: {version}")]
    VersionNotFound { version: String },

    #[error("release {release} not found for version {version}")]
    ReleaseNotFound { version: String, release: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for the not-found variants, `false` for I/O faults
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::VersionNotFound { .. } | Self::ReleaseNotFound { .. }
        )
    }
}

pub type Result<T, E = RepositoryError> = std::result::Result<T, E>;
