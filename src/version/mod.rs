//! Version records and descriptor parsing

pub mod parser;
pub mod record;

pub use parser::{parse_descriptor, TagPrefix, DEFAULT_TAG_PREFIX};
pub use record::{BuildStatus, RecordFields, VersionRecord, NO_TAGS_POST, NO_VERSION};
