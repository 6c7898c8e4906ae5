// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Release metadata for application auto-update
//!
//! This library resolves, orders and serves metadata about released
//! versions and their per-platform update artifacts. Everything is read from
//! a directory tree of `<root>/<version>/<release>/<artifact>`; there is no
//! database and nothing is ever written.

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod repository;
pub mod service;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use config::Config;
pub use error::{ParseError, RepositoryError};
pub use paths::UpdatePaths;
pub use repository::{VersionRecord, VersionRepository};
pub use service::{Status, VERSION_NOT_FOUND_ERR, VersionService};
pub use version::{Component, VersionHierarchy, compare_versions, sort_versions};
