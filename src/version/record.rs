//! The version record and its derived build status

use crate::error::{RelicError, RelicResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version string used for every version field of the fallback record
pub const NO_VERSION: &str = "0.0.0";

/// Distance recorded when no tag is reachable
pub const NO_TAGS_POST: &str = "-1";

/// Raw record fields as they appear on disk.
///
/// Decoding is strict: every field is required and unknown keys are rejected.
/// Use `VersionRecord::try_from` to validate the fields into a record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordFields {
    pub pep386: String,
    pub short: String,
    pub long: String,
    pub date: String,
    pub dirty: bool,
    pub commit: String,
    pub post: String,
}

/// Version information derived from the tag history of a repository.
///
/// Records are immutable. Changing a field yields a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct VersionRecord {
    pep386: String,
    short: String,
    long: String,
    date: String,
    dirty: bool,
    commit: String,
    post: String,
}

impl VersionRecord {
    /// The zero-version record used when no version information exists
    pub fn fallback() -> Self {
        Self {
            pep386: NO_VERSION.to_string(),
            short: NO_VERSION.to_string(),
            long: NO_VERSION.to_string(),
            date: String::new(),
            dirty: true,
            commit: String::new(),
            post: NO_TAGS_POST.to_string(),
        }
    }

    /// Normalized form, `<tag>` or `<tag>.post<N>`
    pub fn pep386(&self) -> &str {
        &self.pep386
    }

    /// Tag-only form
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Tag plus distance and commit, as described by git
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Commits since the tag, as a decimal string
    pub fn post(&self) -> &str {
        &self.post
    }

    /// Commits since the tag. `-1` means no tag was found.
    pub fn distance(&self) -> i64 {
        // Validated on construction
        self.post.parse().unwrap_or(-1)
    }

    /// Abbreviated commit hash, possibly empty
    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// Commit date, possibly empty
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether the working tree had uncommitted changes
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Release when nothing was committed since the tag and the tree is clean
    pub fn build_status(&self) -> BuildStatus {
        if self.distance() <= 0 && !self.dirty {
            BuildStatus::Release
        } else {
            BuildStatus::Development
        }
    }

    /// A copy of this record carrying the given commit date
    pub fn with_date(self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self
        }
    }

    /// A copy of this record carrying the given commit hash
    pub fn with_commit(self, commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            ..self
        }
    }

    pub(crate) fn from_describe(
        tag: &str,
        distance: i64,
        commit: &str,
        dirty: bool,
    ) -> Self {
        let (pep386, long) = if distance == 0 {
            (tag.to_string(), tag.to_string())
        } else {
            (
                format!("{tag}.post{distance}"),
                format!("{tag}-{distance}-g{commit}"),
            )
        };

        Self {
            pep386,
            short: tag.to_string(),
            long,
            date: String::new(),
            dirty,
            commit: commit.to_string(),
            post: distance.to_string(),
        }
    }
}

impl TryFrom<RecordFields> for VersionRecord {
    type Error = RelicError;

    fn try_from(fields: RecordFields) -> RelicResult<Self> {
        if fields.post.trim() != fields.post || fields.post.parse::<i64>().is_err() {
            return Err(RelicError::InvalidRecord(format!(
                "post must be a decimal integer, got {:?}",
                fields.post
            )));
        }

        Ok(Self {
            pep386: fields.pep386,
            short: fields.short,
            long: fields.long,
            date: fields.date,
            dirty: fields.dirty,
            commit: fields.commit,
            post: fields.post,
        })
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pep386)
    }
}

/// Build status derived from a version record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Release,
    Development,
}

impl BuildStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
