use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::email::Email;

/// A message submitted through the contact form. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactAck {
    pub ok: bool,
}
