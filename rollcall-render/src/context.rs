//! Template contexts — serializable rendering payloads built from view
//! units, plus the data-URI encoding of placeholder avatars.
//!
//! The core hands over [`CardView`]/[`RowView`] with a structured photo
//! source; resolving that source into a concrete `src` string (URL
//! passthrough, or an inline SVG data URI) happens here, on the display
//! side of the seam.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use rollcall_core::avatar::AvatarDescriptor;
use rollcall_core::view::{CardView, PhotoSource, RowView};

// ---------------------------------------------------------------------------
// Avatar encoding
// ---------------------------------------------------------------------------

/// Encode a descriptor as a self-contained `data:image/svg+xml;base64,…`
/// reference. Deterministic; requires no network fetch.
pub fn avatar_uri(descriptor: &AvatarDescriptor) -> String {
    let size = descriptor.size;
    // 56px at the 128px default, matching the original artwork ratio.
    let font_size = size * 7 / 16;
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
            r#"<rect width="100%" height="100%" fill="{bg}"/>"#,
            r#"<text x="50%" y="55%" dominant-baseline="middle" text-anchor="middle" "#,
            r#"font-family="Arial, Helvetica, sans-serif" font-size="{fs}" fill="{fg}">{text}</text>"#,
            r#"</svg>"#
        ),
        size = size,
        bg = descriptor.background,
        fg = descriptor.foreground,
        fs = font_size,
        text = xml_escape(&descriptor.initials),
    );
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// The `src` string is emitted with `| safe` so Tera's autoescape does not
/// mangle the `//` in URLs and data URIs; user-supplied URLs are
/// attribute-escaped here instead. Base64 payloads need no escaping.
fn photo_src(photo: &PhotoSource) -> String {
    match photo {
        PhotoSource::Url(url) => xml_escape(url),
        PhotoSource::Placeholder(descriptor) => avatar_uri(descriptor),
    }
}

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

/// Rendering payload for a single gallery card.
#[derive(Debug, Clone, Serialize)]
pub struct CardContext {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub programme_line: String,
    pub interests_line: String,
    pub photo_src: String,
}

impl From<&CardView> for CardContext {
    fn from(card: &CardView) -> Self {
        CardContext {
            id: card.id.to_string(),
            display_name: card.display_name.clone(),
            email: card.email.clone(),
            programme_line: card.programme_line.clone(),
            interests_line: card.interests_line.clone(),
            photo_src: photo_src(&card.photo),
        }
    }
}

/// Rendering payload for a single summary row.
#[derive(Debug, Clone, Serialize)]
pub struct RowContext {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub programme: String,
    pub year: String,
}

impl From<&RowView> for RowContext {
    fn from(row: &RowView) -> Self {
        RowContext {
            id: row.id.to_string(),
            display_name: row.display_name.clone(),
            email: row.email.clone(),
            programme: row.programme.clone(),
            year: row.year.clone(),
        }
    }
}

/// Rendering payload for the whole page: pre-rendered card/row fragments
/// in display order plus the latest status announcement.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub cards: Vec<String>,
    pub rows: Vec<String>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
