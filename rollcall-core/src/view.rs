//! View projection — cards and rows.
//!
//! [`CardView`] and [`RowView`] are pure projections of a [`Profile`]: the
//! formatted display strings plus an id tag, with no display backend
//! involved. The stateless [`Projector`] pushes both units onto a
//! [`DisplaySurface`] and retracts them together; the surface owns the
//! collections, the projector owns nothing.

use log::debug;

use crate::avatar::{placeholder_identity, AvatarDescriptor};
use crate::surface::DisplaySurface;
use crate::types::{Profile, ProfileId};

// ---------------------------------------------------------------------------
// View units
// ---------------------------------------------------------------------------

/// Where a card's image comes from: the supplied URL, or a synthetic
/// placeholder derived from the name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum PhotoSource {
    Url(String),
    Placeholder(AvatarDescriptor),
}

/// A gallery card, tagged with its profile's id.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CardView {
    pub id: ProfileId,
    pub display_name: String,
    pub email: String,
    /// `"{programme} • Year {year}"`.
    pub programme_line: String,
    /// `"Interests: {interests}"`, or `"Interests: —"` when empty.
    pub interests_line: String,
    pub photo: PhotoSource,
}

impl CardView {
    pub fn project(profile: &Profile) -> Self {
        let display_name = profile.full_name();
        let photo = match &profile.photo {
            Some(url) => PhotoSource::Url(url.clone()),
            None => PhotoSource::Placeholder(placeholder_identity(&display_name)),
        };
        CardView {
            id: profile.id,
            email: profile.email.clone(),
            programme_line: format!("{} • Year {}", profile.programme, profile.year),
            interests_line: if profile.interests.is_empty() {
                "Interests: —".to_string()
            } else {
                format!("Interests: {}", profile.interests)
            },
            photo,
            display_name,
        }
    }
}

/// A summary-table row, tagged with its profile's id.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RowView {
    pub id: ProfileId,
    pub display_name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
}

impl RowView {
    pub fn project(profile: &Profile) -> Self {
        RowView {
            id: profile.id,
            display_name: profile.full_name(),
            email: profile.email.clone(),
            programme: profile.programme.to_string(),
            year: profile.year.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Projector
// ---------------------------------------------------------------------------

/// Projects profiles onto a display surface and retracts them again.
#[derive(Debug, Default)]
pub struct Projector;

impl Projector {
    /// Prepend the profile's card and row. Afterwards exactly one card and
    /// one row on the surface carry this profile's id.
    pub fn project(display: &mut impl DisplaySurface, profile: &Profile) {
        debug!("projector: render card+row for {}", profile.id);
        display.prepend_card(CardView::project(profile));
        display.prepend_row(RowView::project(profile));
    }

    /// Remove the card and row tagged `id` from the surface. A unit absent
    /// from one collection is skipped there — redundant retracts are safe.
    pub fn retract(display: &mut impl DisplaySurface, id: &ProfileId) {
        let had_card = display.remove_card(id);
        let had_row = display.remove_row(id);
        debug!("projector: retract {id} (card: {had_card}, row: {had_row})");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
