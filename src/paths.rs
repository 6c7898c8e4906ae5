// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Path composition for update artifacts and API routes
//!
//! The repository only hands out server-relative paths. Turning them into
//! absolute URLs (scheme and host) is left to whatever serves them.

/// Default prefix for every API route
pub const DEFAULT_API_BASE: &str = "/api";

/// Default segment under which artifact files are served
pub const DEFAULT_UPDATE_DATA: &str = "/update_data";

/// Route templates for the HTTP layer, relative to the API base
pub mod routes {
    pub const VERSIONS: &str = "/versions";
    pub const ALL: &str = "/all";
    pub const LATEST: &str = "/latest";
    pub const INFO: &str = "/info/:version";
    pub const UPDATE_URL: &str = "/update_path/:version/:release";
}

/// Prefix configuration for artifact paths
///
/// Each artifact of a release is exposed as
/// `/<api_base>/<update_data>/<version>/<release>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePaths {
    /// API prefix (e.g. "/api")
    pub api_base: String,
    /// Segment the artifact tree is mounted on (e.g. "/update_data")
    pub update_data: String,
}

impl Default for UpdatePaths {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            update_data: DEFAULT_UPDATE_DATA.to_string(),
        }
    }
}

impl UpdatePaths {
    #[must_use]
    pub fn new(api_base: impl Into<String>, update_data: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            update_data: update_data.into(),
        }
    }

    /// Build the path for one artifact of a release
    ///
    /// Leading and trailing slashes on the configured prefixes are
    /// normalised, so "api", "/api" and "/api/" all give the same result.
    ///
    /// # Examples
    /// ```
    /// use autoupdate::paths::UpdatePaths;
    ///
    /// let paths = UpdatePaths::default();
    /// assert_eq!(
    ///     paths.artifact_path("1.0.1", "macos", "dummy_update_file"),
    ///     "/api/update_data/1.0.1/macos/dummy_update_file"
    /// );
    /// ```
    #[must_use]
    pub fn artifact_path(&self, version: &str, release: &str, file: &str) -> String {
        join_segments(&[&self.api_base, &self.update_data, version, release, file])
    }

    /// Build the mount point of the artifact tree (e.g. "/api/update_data")
    #[must_use]
    pub fn update_data_root(&self) -> String {
        join_segments(&[&self.api_base, &self.update_data])
    }

    /// Build the full route for one of the [`routes`] templates
    #[must_use]
    pub fn route(&self, template: &str) -> String {
        join_segments(&[&self.api_base, routes::VERSIONS, template])
    }
}

fn join_segments(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if !trimmed.is_empty() {
            path.push('/');
            path.push_str(trimmed);
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
