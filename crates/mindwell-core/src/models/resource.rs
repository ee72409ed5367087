use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::{optional_string_field, string_field};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ResourceCategory {
    #[default]
    Article,
    Video,
    Guide,
    Helpline,
    Tool,
}

impl FromStr for ResourceCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(Self::Article),
            "video" => Ok(Self::Video),
            "guide" => Ok(Self::Guide),
            "helpline" => Ok(Self::Helpline),
            "tool" => Ok(Self::Tool),
            other => Err(CoreError::UnknownVariant {
                kind: "resource category",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub category: ResourceCategory,
}

impl Resource {
    /// Map a stored document onto a `Resource`.
    ///
    /// Missing text fields become empty strings and a missing category becomes
    /// `article`. Present fields of the wrong type, or an unknown category, fail
    /// the whole mapping.
    pub fn from_document(doc: &Value) -> Result<Self, CoreError> {
        let category = match optional_string_field(doc, "category")? {
            Some(raw) => raw.parse()?,
            None if doc.get("category").is_some() => {
                return Err(CoreError::InvalidField {
                    field: "category",
                    expected: "a resource category",
                });
            }
            None => ResourceCategory::default(),
        };

        Ok(Self {
            title: string_field(doc, "title", "")?,
            description: string_field(doc, "description", "")?,
            url: string_field(doc, "url", "")?,
            category,
        })
    }
}
