//! `rollcall avatar` — inspect the placeholder identity for a name.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use rollcall_core::placeholder_identity;
use rollcall_render::avatar_uri;

/// Arguments for `rollcall avatar`.
#[derive(Args, Debug)]
pub struct AvatarArgs {
    /// Full name; multiple words are joined with spaces.
    #[arg(required = true)]
    pub name: Vec<String>,
}

impl AvatarArgs {
    pub fn run(self) -> Result<()> {
        let full_name = self.name.join(" ");
        let descriptor = placeholder_identity(&full_name);
        println!("initials: {}", descriptor.initials.bold());
        println!(
            "canvas:   {}x{} on {}",
            descriptor.size, descriptor.size, descriptor.background
        );
        println!("{}", avatar_uri(&descriptor));
        Ok(())
    }
}
