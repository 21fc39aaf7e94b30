//! Cart relayed to the admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{Draft, Record};

/// A shopping cart sent to the admin for follow-up.
///
/// The line items are an opaque pass-through of whatever the client page
/// built; the server only requires the array to be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSubmission {
    pub id: String,
    pub contact: String,
    pub message: String,
    pub cart: Vec<Value>,
    pub date: DateTime<Utc>,
}

impl Record for CartSubmission {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Cart payload before the server stamps id and date.
#[derive(Debug, Clone)]
pub struct NewCartSubmission {
    pub contact: String,
    pub message: String,
    pub cart: Vec<Value>,
}

impl Draft for NewCartSubmission {
    type Output = CartSubmission;

    fn into_record(self, id: String, date: DateTime<Utc>) -> CartSubmission {
        CartSubmission {
            id,
            contact: self.contact,
            message: self.message,
            cart: self.cart,
            date,
        }
    }
}
