//! Error types for rollcall-core.

use thiserror::Error;

use crate::types::ProfileId;

/// All errors that can arise from roster operations.
///
/// Validation failures are not errors — they are verdicts carried by
/// [`crate::validate::Validation`]; nothing in this core terminates the
/// session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// An insert hit an identifier already present in the registry.
    /// Identifiers are minted fresh on every accept, so this is a
    /// defensive invariant violation, not a user-facing failure.
    #[error("duplicate profile id {id} on insert")]
    DuplicateId { id: ProfileId },
}
