//! Persisted entities and their submission drafts.
//!
//! Each entity is one record shape in one resource file. The `New*` types
//! are the client-supplied payloads; the store stamps the id (and, where the
//! entity carries one, the submission timestamp) when a draft is appended.

pub mod buy_request;
pub mod cart;
pub mod message;
pub mod product;

pub use buy_request::{BuyRequest, NewBuyRequest};
pub use cart::{CartSubmission, NewCartSubmission};
pub use message::{Message, NewMessage};
pub use product::{NewProduct, Product};
