//! Submission/removal controller.
//!
//! The controller owns the [`Registry`] (single writer) and drives the
//! surfaces through the lifecycle
//! `Idle → Validating → (Rejected → Idle) | (Accepted → Committed → Idle)`.
//! Every operation runs synchronously to completion, and the membership
//! invariant — a profile is in the registry iff exactly one card and one
//! row carry its id — holds at the end of every call.

use log::{debug, warn};

use crate::error::RosterError;
use crate::registry::Registry;
use crate::surface::{DisplaySurface, InputSurface, StatusSurface};
use crate::types::ProfileId;
use crate::validate::{validate, Field, FieldErrors};
use crate::view::Projector;

/// Status line when any field is rejected.
pub const STATUS_REJECTED: &str = "Please fix the highlighted errors.";

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Profile committed under this fresh id; fields were reset and focus
    /// returned to the first field.
    Accepted(ProfileId),
    /// Per-field messages were written to the input surface; registry and
    /// views are untouched.
    Rejected(FieldErrors),
}

/// Result of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Profile retracted from both views and deleted from the registry.
    Removed,
    /// The id was not registered; stale or duplicate triggers are ignored
    /// without a status announcement.
    Ignored,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Orchestrates validate → commit → project → announce.
pub struct Controller<D, I, S>
where
    D: DisplaySurface,
    I: InputSurface,
    S: StatusSurface,
{
    registry: Registry,
    display: D,
    input: I,
    status: S,
}

impl<D, I, S> Controller<D, I, S>
where
    D: DisplaySurface,
    I: InputSurface,
    S: StatusSurface,
{
    /// A controller with an empty registry, created at session start.
    pub fn new(display: D, input: I, status: S) -> Self {
        Controller { registry: Registry::new(), display, input, status }
    }

    /// Handle a submit action against the input surface's current values.
    ///
    /// The `Err` branch is the defensive duplicate-insert backstop; ids are
    /// collision-checked before the insert, so it is unreachable in
    /// practice.
    pub fn submit(&mut self) -> Result<SubmitOutcome, RosterError> {
        self.input.clear_errors();
        let raw = self.input.read();

        let accepted = match validate(&raw).into_accepted() {
            Ok(fields) => fields,
            Err(field_errors) => {
                for (field, message) in &field_errors {
                    self.input.set_error(*field, message);
                }
                self.status.announce(STATUS_REJECTED);
                return Ok(SubmitOutcome::Rejected(field_errors));
            }
        };

        // Fresh ids should never collide; regenerate if one ever does.
        let id = loop {
            let candidate = ProfileId::mint();
            if !self.registry.contains(&candidate) {
                break candidate;
            }
            warn!("minted id {candidate} already registered; regenerating");
        };

        let profile = accepted.into_profile(id);
        let full_name = profile.full_name();
        self.registry.put(profile.clone())?;
        Projector::project(&mut self.display, &profile);
        debug!("controller: committed {id} ({full_name})");

        self.status.announce(&format!("Added profile for {full_name}."));
        self.input.reset();
        self.input.focus(Field::FirstName);
        Ok(SubmitOutcome::Accepted(id))
    }

    /// Handle a removal request for `id`.
    pub fn remove(&mut self, id: &ProfileId) -> RemoveOutcome {
        let full_name = match self.registry.get(id) {
            Some(profile) => profile.full_name(),
            None => {
                debug!("controller: ignoring removal of unregistered {id}");
                return RemoveOutcome::Ignored;
            }
        };

        Projector::retract(&mut self.display, id);
        self.registry.delete(id);
        self.status.announce(&format!("Removed profile for {full_name}."));
        RemoveOutcome::Removed
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn status(&self) -> &S {
        &self.status
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
