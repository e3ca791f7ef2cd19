//! In-memory profile registry.
//!
//! The registry is the authoritative store of accepted profiles for the
//! session, keyed by [`ProfileId`]. It carries no ordering contract —
//! display order (newest first) is a view concern — and it is owned
//! exclusively by the controller (single writer).

use std::collections::HashMap;

use log::debug;

use crate::error::RosterError;
use crate::types::{Profile, ProfileId};

/// Mapping `id -> Profile` for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Registry {
    profiles: HashMap<ProfileId, Profile>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an accepted profile.
    ///
    /// Returns [`RosterError::DuplicateId`] if the id is already present.
    /// Callers mint fresh ids, so the error path is a defensive backstop.
    pub fn put(&mut self, profile: Profile) -> Result<(), RosterError> {
        let id = profile.id;
        if self.profiles.contains_key(&id) {
            return Err(RosterError::DuplicateId { id });
        }
        debug!("registry: commit {id}");
        self.profiles.insert(id, profile);
        Ok(())
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.profiles.contains_key(id)
    }

    /// Remove a profile. Absent ids are a no-op, not an error.
    pub fn delete(&mut self, id: &ProfileId) -> Option<Profile> {
        let removed = self.profiles.remove(id);
        if removed.is_some() {
            debug!("registry: delete {id}");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
