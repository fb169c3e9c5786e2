//! Submission validation — presence checks for the three required fields.
//!
//! Purely presence-based: no email or phone syntax checking. An empty report
//! means the record may proceed to export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// The fields that must be non-empty before export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
}

impl RequiredField {
    pub const ALL: [RequiredField; 3] =
        [RequiredField::Name, RequiredField::Email, RequiredField::Phone];

    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Email => "Email",
            RequiredField::Phone => "Phone",
        }
    }
}

/// Result of validating a record: one message per missing required field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: BTreeMap<RequiredField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for `field`, if it is currently missing.
    pub fn message(&self, field: RequiredField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn missing_fields(&self) -> impl Iterator<Item = RequiredField> + '_ {
        self.errors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drops the error for `field`. Called when an edit makes the field
    /// non-empty, so inline errors clear the moment they are resolved.
    pub fn clear(&mut self, field: RequiredField) {
        self.errors.remove(&field);
    }
}

fn field_value<'a>(record: &'a ResumeRecord, field: RequiredField) -> &'a str {
    match field {
        RequiredField::Name => &record.personal.name,
        RequiredField::Email => &record.personal.email,
        RequiredField::Phone => &record.personal.phone,
    }
}

/// Checks the three required fields and reports every one that is empty.
pub fn validate(record: &ResumeRecord) -> ValidationReport {
    let mut errors = BTreeMap::new();
    for field in RequiredField::ALL {
        if field_value(record, field).is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }
    ValidationReport { errors }
}
