// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Response envelopes over the version repository
//!
//! Not-found outcomes are folded into an error body and a [`Status`] so a
//! transport can answer with a "not found" response. I/O faults are passed
//! through as `Err` and belong on the server-error path.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::repository::{VersionRecord, VersionRepository};

/// Message returned for any unknown version or release
pub const VERSION_NOT_FOUND_ERR: &str = "Version not found";

/// Outcome class of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_message: String,
}

impl ErrorBody {
    fn not_found() -> Self {
        Self {
            error_message: VERSION_NOT_FOUND_ERR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllResponse {
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<VersionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUrlsResponse {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// A response body together with its outcome class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<T> {
    pub status: Status,
    pub body: T,
}

impl<T> Reply<T> {
    fn ok(body: T) -> Self {
        Self {
            status: Status::Ok,
            body,
        }
    }

    fn not_found(body: T) -> Self {
        Self {
            status: Status::NotFound,
            body,
        }
    }
}

/// Split a repository result into a found value or a not-found marker,
/// propagating I/O faults
fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            debug!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Thin response layer over a [`VersionRepository`]
pub struct VersionService {
    repository: VersionRepository,
}

impl VersionService {
    #[must_use]
    pub fn new(repository: VersionRepository) -> Self {
        Self { repository }
    }

    /// # Errors
    /// Returns [`crate::error::RepositoryError::Io`] if the release tree cannot be read
    pub fn all(&self) -> Result<Reply<AllResponse>> {
        let versions = self.repository.list_versions()?;
        Ok(Reply::ok(AllResponse { versions }))
    }

    /// # Errors
    /// Returns [`crate::error::RepositoryError::Io`] if the release tree cannot be read
    pub fn latest(&self) -> Result<Reply<LatestResponse>> {
        Ok(match found(self.repository.get_latest())? {
            Some(record) => Reply::ok(LatestResponse {
                latest: Some(record),
                error: None,
            }),
            None => Reply::not_found(LatestResponse {
                latest: None,
                error: Some(ErrorBody::not_found()),
            }),
        })
    }

    /// # Errors
    /// Returns [`crate::error::RepositoryError::Io`] if the release tree cannot be read
    pub fn info(&self, version: &str) -> Result<Reply<InfoResponse>> {
        Ok(match found(self.repository.get_info(version))? {
            Some(record) => Reply::ok(InfoResponse {
                version: Some(record),
                error: None,
            }),
            None => Reply::not_found(InfoResponse {
                version: None,
                error: Some(ErrorBody::not_found()),
            }),
        })
    }

    /// # Errors
    /// Returns [`crate::error::RepositoryError::Io`] if the release tree cannot be read
    pub fn update_urls(&self, version: &str, release: &str) -> Result<Reply<UpdateUrlsResponse>> {
        Ok(
            match found(self.repository.get_update_urls(version, release))? {
                Some(urls) => Reply::ok(UpdateUrlsResponse { urls, error: None }),
                None => Reply::not_found(UpdateUrlsResponse {
                    urls: vec![],
                    error: Some(ErrorBody::not_found()),
                }),
            },
        )
    }
}

