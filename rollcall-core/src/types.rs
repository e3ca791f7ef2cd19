//! Domain types for the Rollcall roster.
//!
//! A [`Profile`] is immutable once constructed; the only lifecycle
//! transitions are creation (on successful validation) and destruction
//! (on removal). All types serialize via serde.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque unique token identifying an accepted profile.
///
/// Minted fresh at acceptance time, never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Mint a fresh random identifier.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProfileId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A programme offering. The set is fixed; selections outside it are
/// treated as unselected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Programme {
    Cs,
    Se,
    Ds,
    It,
}

impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Programme::Cs => write!(f, "CS"),
            Programme::Se => write!(f, "SE"),
            Programme::Ds => write!(f, "DS"),
            Programme::It => write!(f, "IT"),
        }
    }
}

impl FromStr for Programme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CS" => Ok(Programme::Cs),
            "SE" => Ok(Programme::Se),
            "DS" => Ok(Programme::Ds),
            "IT" => Ok(Programme::It),
            other => Err(format!(
                "unknown programme '{other}'; expected: CS, SE, DS, IT"
            )),
        }
    }
}

/// A year level, `1` through `4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::One => write!(f, "1"),
            Year::Two => write!(f, "2"),
            Year::Three => write!(f, "3"),
            Year::Four => write!(f, "4"),
        }
    }
}

impl FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Year::One),
            "2" => Ok(Year::Two),
            "3" => Ok(Year::Three),
            "4" => Ok(Year::Four),
            other => Err(format!("unknown year '{other}'; expected: 1, 2, 3, 4")),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Raw field values as read from an input surface, before validation.
///
/// All fields are plain strings; `programme` and `year` hold the selected
/// option verbatim (empty string when unselected).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
    pub interests: String,
    pub photo: String,
}

/// An accepted, immutable applicant profile.
///
/// Text fields are stored trimmed of surrounding whitespace; `programme`
/// and `year` are taken verbatim from their selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub programme: Programme,
    pub year: Year,
    /// Free text; may be empty.
    pub interests: String,
    /// Absent when no photo URL was supplied; the placeholder avatar is
    /// derived instead.
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// `"{first_name} {last_name}"` — the display identity used in views
    /// and status announcements.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
