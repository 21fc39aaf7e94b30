//! Impex Core - Record store and domain types.
//!
//! This crate provides everything below the HTTP layer:
//! - [`store`] - Generic JSON-array record store, one file per resource
//! - [`catalog`] - Product store with the featured-item delete protection
//! - [`types`] - The persisted entities and their submission drafts
//! - [`id`] - Record identifier generation
//!
//! # Architecture
//!
//! Each resource (products, messages, carts, buy-requests) is one JSON array
//! in one file under the data directory. Every write replaces the whole file;
//! a per-store async mutex serializes the load-mutate-persist cycle so two
//! in-flight writes cannot lose each other's update. There is no database and
//! no cross-resource transaction.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod id;
pub mod store;
pub mod types;

pub use catalog::{Catalog, FEATURED_COUNT};
pub use error::StoreError;
pub use store::{Draft, Record, RecordStore};
pub use types::*;
