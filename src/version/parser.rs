//! Descriptor parsing
//!
//! Turns `git describe --tags --dirty` output into a `VersionRecord`.
//! Accepted forms:
//!
//! | Descriptor | post | pep386 |
//! |------------|------|--------|
//! | `1.2.3` | 0 | `1.2.3` |
//! | `1.2.3-4-gdeadbeef` | 4 | `1.2.3.post4` |
//! | `1.2.3-0-gdeadbeef` | 0 | `1.2.3` |
//! | `1.2.3-4-gdeadbeef-dirty` | 4 | `1.2.3.post4` (dirty) |

use super::record::VersionRecord;
use crate::error::{RelicError, RelicResult};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix removed from tag names unless configured otherwise
pub const DEFAULT_TAG_PREFIX: &str = "release_";

const DIRTY_MARKER: &str = "-dirty";

static DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>\S+?)(?:-(?P<post>\d+)-g(?P<commit>[0-9a-fA-F]+))?$")
        .unwrap_or_else(|e| unreachable!("descriptor regex is valid: {e}"))
});

/// A pattern stripped from the start of tag names
#[derive(Debug, Clone)]
pub struct TagPrefix {
    regex: Option<Regex>,
}

impl TagPrefix {
    /// Compile a prefix pattern. An empty pattern strips nothing.
    pub fn new(pattern: &str) -> RelicResult<Self> {
        let regex = if pattern.is_empty() {
            None
        } else {
            let anchored = format!("^(?:{pattern})");
            Some(Regex::new(&anchored).map_err(|e| RelicError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?)
        };

        Ok(Self { regex })
    }

    /// A prefix that leaves tags untouched
    pub fn none() -> Self {
        Self { regex: None }
    }

    /// Remove the first match at the start of `tag`
    pub fn strip<'a>(&self, tag: &'a str) -> &'a str {
        match self.regex.as_ref().and_then(|re| re.find(tag)) {
            Some(m) => &tag[m.end()..],
            None => tag,
        }
    }
}

impl Default for TagPrefix {
    fn default() -> Self {
        Self {
            regex: Some(
                Regex::new(&format!("^(?:{})", regex::escape(DEFAULT_TAG_PREFIX)))
                    .unwrap_or_else(|e| unreachable!("default prefix is valid: {e}")),
            ),
        }
    }
}

/// Parse a describe-style descriptor into a version record
pub fn parse_descriptor(descriptor: &str, prefix: &TagPrefix) -> RelicResult<VersionRecord> {
    let malformed = || RelicError::MalformedVersionString(descriptor.to_string());

    let trimmed = descriptor.trim();
    let (body, dirty) = match trimmed.strip_suffix(DIRTY_MARKER) {
        Some(body) => (body, true),
        None => (trimmed, false),
    };

    let caps = DESCRIPTOR.captures(body).ok_or_else(malformed)?;

    let tag = prefix.strip(&caps["tag"]);
    if tag.is_empty() {
        return Err(malformed());
    }

    let (distance, commit) = match (caps.name("post"), caps.name("commit")) {
        (Some(post), Some(commit)) => {
            let distance = post.as_str().parse::<i64>().map_err(|_| malformed())?;
            (distance, commit.as_str())
        }
        _ => (0, ""),
    };

    Ok(VersionRecord::from_describe(tag, distance, commit, dirty))
}
