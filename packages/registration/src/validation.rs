//! Field validators and the per-field error map.
//!
//! Every validator is a pure function from the raw field text to an optional
//! message: `None` means the value is acceptable. [`Field::validator`] is the
//! dispatch table used for on-blur validation.

use std::collections::BTreeMap;

use crate::models::RegistrationDraft;

pub fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Full Name is required");
    }
    None
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Email is required");
    }
    if !is_email(email) {
        return Some("Invalid email format");
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<&'static str> {
    if phone.is_empty() {
        return Some("Phone Number is required");
    }
    if !is_phone(phone) {
        return Some("Invalid phone number");
    }
    None
}

pub fn validate_bank_account(account: &str) -> Option<&'static str> {
    if account.trim().is_empty() {
        return Some("Bank Account is required");
    }
    None
}

pub fn validate_amount(amount: &str) -> Option<&'static str> {
    if amount.is_empty() {
        return Some("This field is required");
    }
    match amount.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => None,
        _ => Some("Must be a positive number"),
    }
}

pub fn validate_location(location: &str) -> Option<&'static str> {
    if location.is_empty() {
        return Some("Location is required");
    }
    None
}

/// Whitespace as a browser pattern's `\s` sees it: Unicode White_Space
/// without U+0085, plus the byte-order mark U+FEFF.
fn is_pattern_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
fn is_email(email: &str) -> bool {
    if email.chars().any(is_pattern_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Optional leading `+`, then at least eight digits, spaces or hyphens.
fn is_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    body.chars().count() >= 8
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || is_pattern_space(c) || c == '-')
}

/// A text field of the registration draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    BankAccount,
    MaxAmount,
    MonthlySavings,
    Location,
}

impl Field {
    /// The step-1 fields that gate advancing and submitting.
    pub const CREDENTIALS: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::BankAccount];

    pub fn validator(self) -> fn(&str) -> Option<&'static str> {
        match self {
            Field::Name => validate_name,
            Field::Email => validate_email,
            Field::Phone => validate_phone,
            Field::BankAccount => validate_bank_account,
            Field::MaxAmount | Field::MonthlySavings => validate_amount,
            Field::Location => validate_location,
        }
    }

    pub fn value(self, draft: &RegistrationDraft) -> &str {
        match self {
            Field::Name => &draft.name,
            Field::Email => &draft.email,
            Field::Phone => &draft.phone,
            Field::BankAccount => &draft.bank_account,
            Field::MaxAmount => &draft.max_amount,
            Field::MonthlySavings => &draft.monthly_savings,
            Field::Location => &draft.location,
        }
    }

    pub(crate) fn value_mut(self, draft: &mut RegistrationDraft) -> &mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Email => &mut draft.email,
            Field::Phone => &mut draft.phone,
            Field::BankAccount => &mut draft.bank_account,
            Field::MaxAmount => &mut draft.max_amount,
            Field::MonthlySavings => &mut draft.monthly_savings,
            Field::Location => &mut draft.location,
        }
    }

    /// Run this field's validator against the draft.
    pub fn check(self, draft: &RegistrationDraft) -> Option<&'static str> {
        (self.validator())(self.value(draft))
    }
}

/// Validation results keyed by field.
///
/// A missing key means the field has not been validated yet; `Some(None)`
/// means it was validated and passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<Field, Option<&'static str>>,
}

impl FieldErrors {
    /// The error shown next to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries.get(&field).copied().flatten()
    }

    pub fn is_validated(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        self.entries.insert(field, error);
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(Option::is_some)
    }

    /// Fields that currently carry an error, in declaration order.
    pub fn failing(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries
            .iter()
            .filter_map(|(field, error)| error.map(|e| (*field, e)))
    }
}
