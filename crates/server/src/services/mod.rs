//! Supporting services.

pub mod uploads;
