//! Input validation policy
//!
//! Two modes are used by every resource handler:
//!
//! - **full** ([`Required`]): on create, every declared field must be present
//!   and strings must be non-blank after trimming. One missing field fails the
//!   whole request with [`FIELDS_REQUIRED`].
//! - **sparse** ([`Patch`]): on update, each field is applied on its own if it
//!   is present (and non-blank for strings); otherwise the stored value stays.
//!
//! Sparse patches cannot clear a field: absent and blank both mean "keep".

use shared::error::AppError;

/// Client-facing message for a failed full validation
pub const FIELDS_REQUIRED: &str = "All fields have to be filled in!";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Full-mode collector: records which required fields are missing
///
/// ```ignore
/// let mut required = Required::default();
/// let name = required.text("name", payload.name);
/// let Some(name) = name else {
///     return Err(required.into_error());
/// };
/// ```
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    /// Required string: present and non-blank
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = non_blank(value);
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// Required non-string value: present
    pub fn value<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Validation error naming the missing fields in its details
    pub fn into_error(self) -> AppError {
        tracing::warn!(missing = ?self.missing, "Required fields are not filled in");
        AppError::validation(FIELDS_REQUIRED).with_detail("missingFields", self.missing)
    }
}

/// Sparse-mode applier: overwrites only supplied values and remembers which
#[derive(Debug, Default)]
pub struct Patch {
    changed: Vec<&'static str>,
}

impl Patch {
    /// Overwrite `target` when `value` is present and non-blank
    pub fn text(&mut self, field: &'static str, target: &mut String, value: Option<String>) {
        if let Some(v) = non_blank(value) {
            *target = v;
            self.changed.push(field);
        }
    }

    /// Overwrite `target` when `value` is present
    pub fn value<T>(&mut self, field: &'static str, target: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *target = v;
            self.changed.push(field);
        }
    }

    pub fn changed(&self) -> &[&'static str] {
        &self.changed
    }
}
