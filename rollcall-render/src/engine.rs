//! Tera rendering engine for cards, rows, and the assembled page.
//!
//! Templates are embedded at compile time via `include_str!`; the crate
//! ships no loose files. Each rendered fragment carries a
//! `data-id="<profile id>"` tag so a host surface can locate and remove it
//! later.

use log::debug;
use tera::Tera;

use rollcall_core::view::{CardView, RowView};

use crate::context::{CardContext, PageContext, RowContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

// Registered under `.html` names so Tera applies HTML autoescaping.
const TPLS: &[(&str, &str)] = &[
    ("card.html", include_str!("templates/card.html.tera")),
    ("row.html", include_str!("templates/row.html.tera")),
    ("page.html", include_str!("templates/page.html.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TPLS.to_vec())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// HTML materializer for view units. Create once and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render a single gallery card fragment.
    pub fn render_card(&self, card: &CardView) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(CardContext::from(card))?;
        Ok(self.tera.render("card.html", &ctx)?)
    }

    /// Render a single summary-row fragment.
    pub fn render_row(&self, row: &RowView) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(RowContext::from(row))?;
        Ok(self.tera.render("row.html", &ctx)?)
    }

    /// Render the whole page: gallery and summary in the given display
    /// order, plus the latest status announcement in the live region.
    pub fn render_page(
        &self,
        cards: &[CardView],
        rows: &[RowView],
        status: Option<&str>,
    ) -> Result<String, RenderError> {
        debug!("rendering page with {} cards, {} rows", cards.len(), rows.len());
        let ctx = PageContext {
            cards: cards.iter().map(|c| self.render_card(c)).collect::<Result<_, _>>()?,
            rows: rows.iter().map(|r| self.render_row(r)).collect::<Result<_, _>>()?,
            status: status.map(str::to_string),
        };
        let ctx = tera::Context::from_serialize(ctx)?;
        Ok(self.tera.render("page.html", &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
