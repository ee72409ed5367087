//! Document-store collection names and object key conventions.
//!
//! Pure string functions. Each collection is a key prefix; each document is a
//! single JSON object underneath it.

use uuid::Uuid;

pub const ASSESSMENT_RESPONSES: &str = "assessmentresponse";

pub const MOOD_ENTRIES: &str = "moodentry";

pub const CONTACT_MESSAGES: &str = "contactmessage";

pub const RESOURCES: &str = "resource";

pub const TEAM_MEMBERS: &str = "teammember";

/// Separator between a collection name and its document ids.
pub const DELIMITER: &str = "/";

pub fn prefix(collection: &str) -> String {
    format!("{collection}{DELIMITER}")
}

pub fn document(collection: &str, id: Uuid) -> String {
    format!("{collection}{DELIMITER}{id}.json")
}

/// Recover the collection name from a listed common prefix (`"resource/"`).
pub fn from_prefix(prefix: &str) -> &str {
    prefix.strip_suffix(DELIMITER).unwrap_or(prefix)
}
