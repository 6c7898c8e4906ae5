// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Filesystem-backed version repository
//!
//! The release tree follows a fixed layout:
//!
//! ```text
//! <root>/
//!   <version>/
//!     <release>/
//!       <artifact file>...
//! ```
//!
//! Names starting with `.` are ignored at every level. Nothing is cached:
//! each query lists the directories again, and the tree is never written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{RepositoryError, Result};
use crate::paths::UpdatePaths;
use crate::version::{VersionHierarchy, sort_versions};

/// Metadata for one version directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Directory name (e.g. "1.0.1")
    pub name: String,
    /// Parsed form of `name`
    pub hierarchy: VersionHierarchy,
    /// Release platforms available for this version, sorted
    pub releases: Vec<String>,
}

impl VersionRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, releases: Vec<String>) -> Self {
        let name = name.into();
        Self {
            hierarchy: VersionHierarchy::parse(&name),
            name,
            releases,
        }
    }

    #[must_use]
    pub fn has_release(&self, release: &str) -> bool {
        self.releases.iter().any(|r| r == release)
    }
}

/// What to keep from a directory listing
#[derive(Clone, Copy)]
enum EntryKind {
    Directories,
    Files,
}

/// Read-only view over a release data directory
#[derive(Debug, Clone)]
pub struct VersionRepository {
    root: PathBuf,
    paths: UpdatePaths,
}

impl VersionRepository {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            root: config.root,
            paths: config.paths,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn paths(&self) -> &UpdatePaths {
        &self.paths
    }

    /// List all versions, oldest first
    ///
    /// # Errors
    /// Returns [`RepositoryError::Io`] if the root cannot be read
    pub fn list_versions(&self) -> Result<Vec<String>> {
        let mut versions = list_entries(&self.root, EntryKind::Directories)?;
        sort_versions(&mut versions);
        debug!(
            root = %self.root.display(),
            count = versions.len(),
            "listed versions"
        );
        Ok(versions)
    }

    /// Get the record for a single version
    ///
    /// # Errors
    /// Returns [`RepositoryError::VersionNotFound`] if no such version
    /// directory exists, or [`RepositoryError::Io`] on read failure
    pub fn get_info(&self, version: &str) -> Result<VersionRecord> {
        self.ensure_version(version)?;
        let releases = self.list_releases(version)?;
        Ok(VersionRecord::new(version, releases))
    }

    /// Get the record for the highest version
    ///
    /// # Errors
    /// Returns [`RepositoryError::VersionNotFound`] when the repository is
    /// empty, or [`RepositoryError::Io`] on read failure
    pub fn get_latest(&self) -> Result<VersionRecord> {
        let versions = self.list_versions()?;
        match versions.last() {
            Some(latest) => {
                let releases = self.list_releases(latest)?;
                Ok(VersionRecord::new(latest.as_str(), releases))
            }
            None => Err(RepositoryError::VersionNotFound {
                version: String::new(),
            }),
        }
    }

    /// Get the artifact paths for one release of a version, sorted by file name
    ///
    /// # Errors
    /// Returns [`RepositoryError::VersionNotFound`] or
    /// [`RepositoryError::ReleaseNotFound`] when either level is missing, or
    /// [`RepositoryError::Io`] on read failure
    pub fn get_update_urls(&self, version: &str, release: &str) -> Result<Vec<String>> {
        let record = self.get_info(version)?;
        if !record.has_release(release) {
            return Err(RepositoryError::ReleaseNotFound {
                version: version.to_string(),
                release: release.to_string(),
            });
        }

        let release_dir = self.root.join(version).join(release);
        let mut files = list_entries(&release_dir, EntryKind::Files)?;
        files.sort();

        Ok(files
            .iter()
            .map(|file| self.paths.artifact_path(version, release, file))
            .collect())
    }

    fn ensure_version(&self, version: &str) -> Result<()> {
        if self.list_versions()?.iter().any(|v| v == version) {
            Ok(())
        } else {
            Err(RepositoryError::VersionNotFound {
                version: version.to_string(),
            })
        }
    }

    fn list_releases(&self, version: &str) -> Result<Vec<String>> {
        let mut releases = list_entries(&self.root.join(version), EntryKind::Directories)?;
        releases.sort();
        Ok(releases)
    }
}

/// List the visible entries of `dir` of the requested kind
///
/// Entry types are taken from the directory entry itself, so symlinks are
/// never treated as directories.
fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>> {
    let mut names = vec![];

    for entry in fs::read_dir(dir).map_err(|e| RepositoryError::io(dir, e))? {
        let entry = entry.map_err(|e| RepositoryError::io(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| RepositoryError::io(entry.path(), e))?;

        let wanted = match kind {
            EntryKind::Directories => file_type.is_dir(),
            EntryKind::Files => !file_type.is_dir(),
        };
        if !wanted {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    Ok(names)
}
