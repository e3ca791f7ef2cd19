//! Placeholder identity generation.
//!
//! When a profile carries no photo URL, its visual identity is derived
//! from the name: up to two uppercased initials on a fixed dark square.
//! The output is a structured [`AvatarDescriptor`] — encoding it into an
//! actual image reference is a rendering-backend concern.

/// Avatar edge length in pixels.
pub const AVATAR_SIZE: u32 = 128;
/// Background fill.
pub const AVATAR_BACKGROUND: &str = "#11162a";
/// Initial-text fill.
pub const AVATAR_FOREGROUND: &str = "#a1c4ff";

/// A synthetic avatar any rendering backend can materialize.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AvatarDescriptor {
    /// At most two characters, never empty.
    pub initials: String,
    /// Square edge length in pixels.
    pub size: u32,
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Derive display initials from a full name.
///
/// Splits on whitespace, uppercases the first character of each token,
/// keeps at most two. Empty or whitespace-only input falls back to `"U"`.
/// Deterministic and total: unicode and punctuation take the normal path.
pub fn initials(full_name: &str) -> String {
    let mut out = String::new();
    for token in full_name.split_whitespace() {
        if let Some(first) = token.chars().next() {
            out.extend(first.to_uppercase());
        }
        if out.chars().count() >= 2 {
            break;
        }
    }
    let out: String = out.chars().take(2).collect();
    if out.is_empty() {
        "U".to_string()
    } else {
        out
    }
}

/// Build the placeholder identity for a name. Same name, same descriptor.
pub fn placeholder_identity(full_name: &str) -> AvatarDescriptor {
    AvatarDescriptor {
        initials: initials(full_name),
        size: AVATAR_SIZE,
        background: AVATAR_BACKGROUND,
        foreground: AVATAR_FOREGROUND,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
