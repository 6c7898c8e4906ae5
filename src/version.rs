// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version hierarchy parsing and comparison for release directory names
//!
//! A version identifier has the shape `<major>[.<minor>[.<sub>[_<tag>]]]`,
//! for example `1.0.1`, `0.10.0` or `1.0.0_hotfix`. This module decomposes
//! identifiers into a [`VersionHierarchy`] and orders them.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::ParseError;

/// One numeric field of a version hierarchy
///
/// `Malformed` stands in for a segment that is present but not a number.
/// It sorts after every number, so version lists stay totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Option<u64>")]
pub enum Component {
    Number(u64),
    Malformed,
}

impl Component {
    /// Convert a single segment
    ///
    /// Surrounding whitespace is ignored and an empty segment counts as 0.
    /// Signed (`-1`) and exponent (`1e3`) forms are rejected as malformed.
    fn from_segment(segment: &str) -> Self {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return Self::Number(0);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Malformed;
        }
        trimmed.parse().map_or(Self::Malformed, Self::Number)
    }

    #[must_use]
    pub fn as_number(self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Malformed => None,
        }
    }

    #[must_use]
    pub fn is_malformed(self) -> bool {
        self == Self::Malformed
    }
}

impl From<Component> for Option<u64> {
    fn from(component: Component) -> Self {
        component.as_number()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Malformed => f.write_str("NaN"),
        }
    }
}

/// Structured decomposition of a version identifier
///
/// Field order matters: the derived `Ord` compares `major`, `minor`, `sub`
/// and then `tag`, which is exactly the ordering used for version lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VersionHierarchy {
    pub major: Component,
    pub minor: Component,
    pub sub: Component,
    pub tag: String,
}

impl Default for VersionHierarchy {
    fn default() -> Self {
        Self {
            major: Component::Number(0),
            minor: Component::Number(0),
            sub: Component::Number(0),
            tag: String::new(),
        }
    }
}

impl VersionHierarchy {
    /// Build a well-formed hierarchy from its parts
    #[must_use]
    pub fn new(major: u64, minor: u64, sub: u64, tag: impl Into<String>) -> Self {
        Self {
            major: Component::Number(major),
            minor: Component::Number(minor),
            sub: Component::Number(sub),
            tag: tag.into(),
        }
    }

    /// Parse a raw version identifier
    ///
    /// Never fails. Missing segments default to 0 and a missing tag to the
    /// empty string; a segment that is present but not numeric becomes
    /// [`Component::Malformed`]. Only the text between the first and second
    /// underscore of the third segment is kept as the tag, and segments past
    /// the third are ignored.
    ///
    /// # Examples
    /// ```
    /// use autoupdate::version::{Component, VersionHierarchy};
    ///
    /// assert_eq!(VersionHierarchy::parse("1.0.1_foo"), VersionHierarchy::new(1, 0, 1, "foo"));
    /// assert_eq!(VersionHierarchy::parse("1"), VersionHierarchy::new(1, 0, 0, ""));
    /// assert_eq!(VersionHierarchy::parse("0.1_foo").minor, Component::Malformed);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut hierarchy = Self::default();
        let mut segments = raw.split('.');

        // split always yields at least one piece
        hierarchy.major = Component::from_segment(segments.next().unwrap_or_default());
        if let Some(minor) = segments.next() {
            hierarchy.minor = Component::from_segment(minor);
        }
        if let Some(sub_and_tag) = segments.next() {
            let mut pieces = sub_and_tag.split('_');
            hierarchy.sub = Component::from_segment(pieces.next().unwrap_or_default());
            if let Some(tag) = pieces.next() {
                hierarchy.tag = tag.to_string();
            }
        }

        hierarchy
    }

    /// Parse a raw version identifier, rejecting malformed components
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedComponent`] naming the first field
    /// that is not numeric.
    ///
    /// # Examples
    /// ```
    /// use autoupdate::version::VersionHierarchy;
    ///
    /// assert!(VersionHierarchy::try_parse("0.10.0").is_ok());
    /// assert!(VersionHierarchy::try_parse("0.1_foo").is_err());
    /// ```
    pub fn try_parse(raw: &str) -> Result<Self, ParseError> {
        let hierarchy = Self::parse(raw);
        let fields = [
            ("major", hierarchy.major),
            ("minor", hierarchy.minor),
            ("sub", hierarchy.sub),
        ];
        match fields.iter().find(|(_, component)| component.is_malformed()) {
            Some((field, _)) => Err(ParseError::MalformedComponent {
                version: raw.to_string(),
                field: *field,
            }),
            None => Ok(hierarchy),
        }
    }

    /// `true` when every numeric field parsed as a number
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !(self.major.is_malformed() || self.minor.is_malformed() || self.sub.is_malformed())
    }
}

impl fmt::Display for VersionHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.sub)?;
        if !self.tag.is_empty() {
            write!(f, "_{}", self.tag)?;
        }
        Ok(())
    }
}

/// Compare two version identifiers
///
/// Orders by `major`, `minor` and `sub` numerically, then by `tag` as a
/// plain string, so an untagged version precedes any tagged one and tags
/// compare lexicographically (`hitfix` < `hotfix`). Malformed components
/// sort after all numbers.
///
/// # Arguments
/// * `a` - First version identifier
/// * `b` - Second version identifier
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use autoupdate::version::compare_versions;
///
/// assert_eq!(compare_versions("0.9.9", "0.10.0"), Ordering::Less);
/// assert_eq!(compare_versions("1.0.0", "1.0.0_hotfix"), Ordering::Less);
/// assert_eq!(compare_versions("1.0.0_hotfix", "1.0.0_hitfix"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    VersionHierarchy::parse(a).cmp(&VersionHierarchy::parse(b))
}

/// Sort version identifiers ascending with [`compare_versions`]
///
/// Identifiers with equal hierarchies (`1`, `1.0`, `1.0.0`) are ordered by
/// name, so the result never depends on directory listing order.
pub fn sort_versions(versions: &mut [String]) {
    versions.sort_by_cached_key(|v| (VersionHierarchy::parse(v), v.clone()));
}
