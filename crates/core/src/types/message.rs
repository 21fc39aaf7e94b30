//! Contact form message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Draft, Record};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Submission time, serialized as an RFC 3339 string.
    pub date: DateTime<Utc>,
}

impl Record for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Contact form payload before the server stamps id and date.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Draft for NewMessage {
    type Output = Message;

    fn into_record(self, id: String, date: DateTime<Utc>) -> Message {
        Message {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            date,
        }
    }
}
