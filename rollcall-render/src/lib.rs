//! # rollcall-render
//!
//! Tera-based materializer that turns the core's card/row view units into
//! HTML fragments and a full roster page, and encodes placeholder avatars
//! as self-contained SVG data URIs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall_core::view::CardView;
//! use rollcall_render::Renderer;
//!
//! fn show(cards: &[CardView]) {
//!     if let Ok(renderer) = Renderer::new() {
//!         for card in cards {
//!             if let Ok(html) = renderer.render_card(card) {
//!                 println!("{html}");
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{avatar_uri, CardContext, PageContext, RowContext};
pub use engine::Renderer;
pub use error::RenderError;
