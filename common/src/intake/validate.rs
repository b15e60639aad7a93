use crate::model::duration::DateSelection;
use crate::requests::SubmitRequest;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PHONE_INVALID: &str = "Enter a valid phone number (at least 7 digits).";
pub const DURATION_REQUIRED: &str = "Please select a start and an end date for the duration.";
pub const DATE_ORDER: &str = "Start date cannot be after end date.";

pub const MIN_PHONE_DIGITS: usize = 7;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Form input that passed every rule, together with the values the rules
/// already derived from it.
#[derive(Debug, Clone)]
pub struct ValidatedForm<'a> {
    pub(crate) form: &'a SubmitRequest,
    pub(crate) phone: String,
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

/// `local@domain.tld` shape check. Case and length are not restricted.
///
/// A single trailing `\n` is tolerated, as a `$`-anchored match allows it;
/// normalization trims it before the address is stored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.strip_suffix('\n').unwrap_or(email))
}

/// Drops every character that is not an ASCII digit.
pub fn clean_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Runs every rule against `form`.
///
/// Rules do not short-circuit: all failures are reported, in the order name,
/// email, phone, duration. The date-order rule only runs when the duration is
/// a complete range, so a missing range never yields two duration messages.
pub fn check(form: &SubmitRequest) -> Result<ValidatedForm<'_>, Vec<String>> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(NAME_REQUIRED.to_string());
    }
    if !is_valid_email(&form.email) {
        errors.push(EMAIL_INVALID.to_string());
    }
    let phone = clean_phone(&form.phone);
    if phone.len() < MIN_PHONE_DIGITS {
        errors.push(PHONE_INVALID.to_string());
    }

    let range = match form.duration {
        DateSelection::Range(start, end) => {
            if start > end {
                errors.push(DATE_ORDER.to_string());
            }
            Some((start, end))
        }
        DateSelection::NoSelection | DateSelection::Invalid => {
            errors.push(DURATION_REQUIRED.to_string());
            None
        }
    };

    match range {
        Some((start, end)) if errors.is_empty() => Ok(ValidatedForm {
            form,
            phone,
            start,
            end,
        }),
        _ => Err(errors),
    }
}

/// The failure messages for `form`; empty when it is valid.
pub fn validate(form: &SubmitRequest) -> Vec<String> {
    check(form).err().unwrap_or_default()
}
