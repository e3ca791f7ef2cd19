//! `rollcall render` — drive the roster over a submissions file and write
//! the rendered page.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use rollcall_core::{
    Controller, MemoryDisplay, MemoryInput, MemoryStatus, ProfileId, RemoveOutcome, SubmitOutcome,
};
use rollcall_render::Renderer;

use crate::commands::load_submissions;

/// Arguments for `rollcall render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file holding an array of raw submissions.
    pub file: PathBuf,

    /// Where to write the rendered HTML page.
    #[arg(long)]
    pub out: PathBuf,

    /// Remove an accepted entry after the run: a 1-based position in the
    /// submissions file, or a profile id. Repeatable.
    #[arg(long)]
    pub remove: Vec<String>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let submissions = load_submissions(&self.file)?;

        let mut controller =
            Controller::new(MemoryDisplay::new(), MemoryInput::new(), MemoryStatus::new());

        // Accepted ids by input position, so --remove can address either.
        let mut accepted_ids: Vec<Option<ProfileId>> = Vec::with_capacity(submissions.len());
        let mut rejected = 0usize;

        for (index, raw) in submissions.into_iter().enumerate() {
            controller.input_mut().set_values(raw);
            let outcome = controller
                .submit()
                .with_context(|| format!("submission {} failed to commit", index + 1))?;
            match outcome {
                SubmitOutcome::Accepted(id) => {
                    accepted_ids.push(Some(id));
                    announce(&controller, "✓".green());
                }
                SubmitOutcome::Rejected(errors) => {
                    accepted_ids.push(None);
                    rejected += 1;
                    announce(&controller, "✗".red());
                    for (field, message) in &errors {
                        println!("    {}: {}", field.to_string().yellow(), message);
                    }
                }
            }
        }

        let mut removed = 0usize;
        for spec in &self.remove {
            let id = self.resolve_remove_target(spec, &accepted_ids)?;
            if controller.remove(&id) == RemoveOutcome::Removed {
                removed += 1;
                announce(&controller, "✓".green());
            } else {
                println!("  {} no profile registered under {id}", "·".bright_black());
            }
        }

        let renderer = Renderer::new().context("failed to build renderer")?;
        let html = renderer.render_page(
            controller.display().cards(),
            controller.display().rows(),
            controller.status().last(),
        )?;
        std::fs::write(&self.out, html)
            .with_context(|| format!("failed to write page to {}", self.out.display()))?;

        let on_roster = controller.registry().len();
        println!(
            "{} on roster, {} rejected, {} removed → {}",
            on_roster,
            rejected,
            removed,
            self.out.display()
        );
        Ok(())
    }

    fn resolve_remove_target(
        &self,
        spec: &str,
        accepted_ids: &[Option<ProfileId>],
    ) -> Result<ProfileId> {
        if let Ok(position) = spec.parse::<usize>() {
            if position == 0 || position > accepted_ids.len() {
                bail!(
                    "--remove {position} is out of range (1..={})",
                    accepted_ids.len()
                );
            }
            return accepted_ids[position - 1]
                .with_context(|| format!("submission {position} was rejected, nothing to remove"));
        }
        spec.parse::<ProfileId>()
            .with_context(|| format!("--remove '{spec}' is neither a position nor a profile id"))
    }
}

fn announce(
    controller: &Controller<MemoryDisplay, MemoryInput, MemoryStatus>,
    mark: colored::ColoredString,
) {
    if let Some(status) = controller.status().last() {
        println!("  {mark} {status}");
    }
}
