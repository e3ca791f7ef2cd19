//! Field validation rules.
//!
//! Each field has a single-value checker usable for live/inline feedback
//! (`check_email` on blur, etc.); [`validate`] runs the whole fieldset by
//! delegating to those same checkers, so the two surfaces cannot drift.
//! All rules are evaluated independently — no short-circuit — and every
//! applicable error is reported together.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Profile, ProfileId, Programme, RawSubmission, Year};

/// Simple `local@domain.tld` shape — deliberately not RFC-exhaustive.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Photo URLs must be absolute http(s) references.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://.+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Fields and error maps
// ---------------------------------------------------------------------------

/// A form field. `Display` prints the input-surface slot name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Programme,
    Year,
    Interests,
    Photo,
}

impl Field {
    /// Slot name on the input surface (`firstName`, `photo`, …).
    pub fn slot(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Programme => "programme",
            Field::Year => "year",
            Field::Interests => "interests",
            Field::Photo => "photo",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slot())
    }
}

/// Per-field error messages, keyed by field in stable order.
pub type FieldErrors = BTreeMap<Field, String>;

// ---------------------------------------------------------------------------
// Single-field checkers
// ---------------------------------------------------------------------------

/// `None` = pass, `Some(message)` = reject.
pub fn check_first_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("First name is required.".to_string())
    } else {
        None
    }
}

pub fn check_last_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Last name is required.".to_string())
    } else {
        None
    }
}

/// Empty and malformed emails produce distinct messages.
pub fn check_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Email is required.".to_string())
    } else if !EMAIL_RE.is_match(trimmed) {
        Some("Enter a valid email, e.g. you@school.edu.".to_string())
    } else {
        None
    }
}

/// An unknown option cannot be selected, so it reads as unselected.
pub fn check_programme(value: &str) -> Option<String> {
    if Programme::from_str(value.trim()).is_err() {
        Some("Please select a programme.".to_string())
    } else {
        None
    }
}

pub fn check_year(value: &str) -> Option<String> {
    if Year::from_str(value.trim()).is_err() {
        Some("Please select a year.".to_string())
    } else {
        None
    }
}

/// Optional field: empty passes, non-empty must be an http(s) URL.
pub fn check_photo(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !URL_RE.is_match(trimmed) {
        Some("Photo URL should start with http(s)://".to_string())
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Fieldset validation
// ---------------------------------------------------------------------------

/// Normalized, typed field values produced by an accepted validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: Programme,
    pub year: Year,
    pub interests: String,
    pub photo: Option<String>,
}

impl AcceptedFields {
    /// Construct the immutable [`Profile`] under a freshly minted id.
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            programme: self.programme,
            year: self.year,
            interests: self.interests,
            photo: self.photo,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a fieldset validation: per-field messages plus, when every
/// rule passed, the normalized typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub field_errors: FieldErrors,
    accepted: Option<AcceptedFields>,
}

impl Validation {
    /// True iff no field produced an error.
    pub fn accepted(&self) -> bool {
        self.accepted.is_some()
    }

    /// Consume the verdict: normalized fields on accept, the error map on
    /// reject.
    pub fn into_accepted(self) -> Result<AcceptedFields, FieldErrors> {
        match self.accepted {
            Some(fields) => Ok(fields),
            None => Err(self.field_errors),
        }
    }
}

/// Validate a whole submission. Pure: surfacing messages is the caller's
/// concern.
pub fn validate(raw: &RawSubmission) -> Validation {
    let mut field_errors = FieldErrors::new();

    let checks: [(Field, Option<String>); 6] = [
        (Field::FirstName, check_first_name(&raw.first_name)),
        (Field::LastName, check_last_name(&raw.last_name)),
        (Field::Email, check_email(&raw.email)),
        (Field::Programme, check_programme(&raw.programme)),
        (Field::Year, check_year(&raw.year)),
        (Field::Photo, check_photo(&raw.photo)),
    ];
    for (field, verdict) in checks {
        if let Some(message) = verdict {
            field_errors.insert(field, message);
        }
    }

    if !field_errors.is_empty() {
        return Validation { field_errors, accepted: None };
    }

    // Every checker passed, so both parses below are guaranteed to succeed;
    // a parse failure still surfaces as a selection error rather than a panic.
    let programme = match Programme::from_str(raw.programme.trim()) {
        Ok(p) => p,
        Err(_) => {
            field_errors.insert(Field::Programme, "Please select a programme.".to_string());
            return Validation { field_errors, accepted: None };
        }
    };
    let year = match Year::from_str(raw.year.trim()) {
        Ok(y) => y,
        Err(_) => {
            field_errors.insert(Field::Year, "Please select a year.".to_string());
            return Validation { field_errors, accepted: None };
        }
    };

    let photo = raw.photo.trim();
    let accepted = AcceptedFields {
        first_name: raw.first_name.trim().to_string(),
        last_name: raw.last_name.trim().to_string(),
        email: raw.email.trim().to_string(),
        programme,
        year,
        interests: raw.interests.trim().to_string(),
        photo: if photo.is_empty() { None } else { Some(photo.to_string()) },
    };
    Validation { field_errors, accepted: Some(accepted) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> RawSubmission {
        RawSubmission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@math.org".into(),
            programme: "CS".into(),
            year: "2".into(),
            interests: String::new(),
            photo: String::new(),
        }
    }

    #[test]
    fn well_formed_submission_is_accepted() {
        let v = validate(&ada());
        assert!(v.accepted());
        assert!(v.field_errors.is_empty());
        let fields = v.into_accepted().expect("accepted");
        assert_eq!(fields.programme, Programme::Cs);
        assert_eq!(fields.year, Year::Two);
        assert!(fields.photo.is_none());
    }

    #[test]
    fn empty_submission_reports_every_required_field() {
        let v = validate(&RawSubmission::default());
        assert!(!v.accepted());
        let fields: Vec<Field> = v.field_errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![Field::FirstName, Field::LastName, Field::Email, Field::Programme, Field::Year]
        );
    }

    #[test]
    fn empty_and_malformed_email_messages_differ() {
        let required = check_email("").expect("required");
        let malformed = check_email("a@b").expect("malformed");
        assert_ne!(required, malformed);
        assert!(required.contains("required"));
    }

    #[test]
    fn fields_are_trimmed_on_acceptance() {
        let mut raw = ada();
        raw.first_name = "  Ada ".into();
        raw.interests = " maths ".into();
        raw.photo = " https://x.png ".into();
        let fields = validate(&raw).into_accepted().expect("accepted");
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.interests, "maths");
        assert_eq!(fields.photo.as_deref(), Some("https://x.png"));
    }

    #[test]
    fn interests_never_produce_an_error() {
        let mut raw = ada();
        raw.interests = String::new();
        assert!(validate(&raw).accepted());
        raw.interests = "weaving, analytical engines".into();
        assert!(validate(&raw).accepted());
    }

    #[test]
    fn unknown_selection_reads_as_unselected() {
        let mut raw = ada();
        raw.programme = "ASTROLOGY".into();
        let v = validate(&raw);
        assert_eq!(
            v.field_errors.get(&Field::Programme).map(String::as_str),
            Some("Please select a programme.")
        );
    }
}
