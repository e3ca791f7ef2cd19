//! Rollcall — registration roster CLI.
//!
//! # Usage
//!
//! ```text
//! rollcall check <submissions.json>
//! rollcall render <submissions.json> --out <page.html> [--remove <pos|id>]...
//! rollcall avatar <full name>...
//! ```
//!
//! The submissions file is a JSON array of raw field values, e.g.
//! `[{"firstName": "Ada", "lastName": "Lovelace", "email": "ada@math.org",
//! "programme": "CS", "year": "2"}]`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{avatar::AvatarArgs, check::CheckArgs, render::RenderArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    version,
    about = "Validate registration submissions and render the roster",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every submission in a file and report per-field verdicts.
    Check(CheckArgs),

    /// Run submissions through the roster and write the rendered page.
    Render(RenderArgs),

    /// Print the placeholder identity derived from a name.
    Avatar(AvatarArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Avatar(args) => args.run(),
    }
}
