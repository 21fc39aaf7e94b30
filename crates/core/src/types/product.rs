//! Catalog product.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Draft, Record};

/// A catalog product.
///
/// `price` is the string entered by the admin, passed through unparsed; the
/// catalog does no arithmetic on it. `images` is an ordered list of URLs,
/// either `/uploads/...` paths for stored files or external links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Admin-submitted product, before the id is assigned. Image URLs are
/// already resolved (uploads stored, links trimmed) by the caller.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Vec<String>,
}

impl Draft for NewProduct {
    type Output = Product;

    // Products carry no submission timestamp.
    fn into_record(self, id: String, _date: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            images: self.images,
        }
    }
}
