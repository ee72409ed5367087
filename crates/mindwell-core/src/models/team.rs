use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::{optional_string_field, string_field};
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl TeamMember {
    /// Map a stored document onto a `TeamMember`. Missing `name`/`role` become
    /// empty strings.
    pub fn from_document(doc: &Value) -> Result<Self, CoreError> {
        Ok(Self {
            name: string_field(doc, "name", "")?,
            role: string_field(doc, "role", "")?,
            bio: optional_string_field(doc, "bio")?,
            avatar: optional_string_field(doc, "avatar")?,
        })
    }
}
