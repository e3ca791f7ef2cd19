//! Rollcall core library — validation, identity, registry, projection.
//!
//! Public API surface:
//! - [`types`] — ids, enums, [`RawSubmission`], [`Profile`]
//! - [`validate`] — per-field checkers and fieldset validation
//! - [`avatar`] — initials + placeholder identity descriptor
//! - [`registry`] — session-resident profile store
//! - [`view`] — card/row projections and the [`Projector`]
//! - [`surface`] — collaborator traits + in-memory surfaces
//! - [`controller`] — the submit/remove state machine
//! - [`error`] — [`RosterError`]

pub mod avatar;
pub mod controller;
pub mod error;
pub mod registry;
pub mod surface;
pub mod types;
pub mod validate;
pub mod view;

pub use avatar::{initials, placeholder_identity, AvatarDescriptor};
pub use controller::{Controller, RemoveOutcome, SubmitOutcome};
pub use error::RosterError;
pub use registry::Registry;
pub use surface::{
    DisplaySurface, InputSurface, MemoryDisplay, MemoryInput, MemoryStatus, StatusSurface,
};
pub use types::{Profile, ProfileId, Programme, RawSubmission, Year};
pub use validate::{validate, Field, FieldErrors, Validation};
pub use view::{CardView, PhotoSource, Projector, RowView};
