//! Shared domain types for the marketing request intake service.
//!
//! - `model`: the canonical `MarketingRequest` record and the fixed selections
//!   (`Channel`, `Activity`, `DateSelection`) the form offers.
//! - `requests`: payloads exchanged between the form and the backend.
//! - `intake`: validation of raw form input and normalization into a record.

pub mod intake;
pub mod model;
pub mod requests;
