//! Buy-now lead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Draft, Record};
use crate::types::Product;

/// A "buy now" lead for a single product.
///
/// `product` is a denormalized snapshot of the product at submission time,
/// not a reference; deleting the product later leaves the lead intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub message: String,
    pub product: Product,
    pub date: DateTime<Utc>,
}

impl Record for BuyRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Buy-now payload with the product already resolved by the caller.
#[derive(Debug, Clone)]
pub struct NewBuyRequest {
    pub name: String,
    pub contact: String,
    pub message: String,
    pub product: Product,
}

impl Draft for NewBuyRequest {
    type Output = BuyRequest;

    fn into_record(self, id: String, date: DateTime<Utc>) -> BuyRequest {
        BuyRequest {
            id,
            name: self.name,
            contact: self.contact,
            message: self.message,
            product: self.product,
            date,
        }
    }
}
