//! Validation and normalization of raw form input.
//!
//! [`check`] runs every rule and either collects all failure messages, in rule
//! order, or hands back a [`ValidatedForm`]. Only a `ValidatedForm` can be
//! turned into a [`MarketingRequest`](crate::model::marketing_request::MarketingRequest),
//! so nothing unvalidated ever reaches the store.

mod normalize;
mod validate;

pub use validate::{
    DATE_ORDER, DURATION_REQUIRED, EMAIL_INVALID, MIN_PHONE_DIGITS, NAME_REQUIRED,
    PHONE_INVALID, ValidatedForm, check, clean_phone, is_valid_email, validate,
};
