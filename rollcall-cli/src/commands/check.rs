//! `rollcall check` — validate a submissions file without touching views.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use rollcall_core::validate::validate;
use rollcall_core::RawSubmission;

use crate::commands::load_submissions;

/// Arguments for `rollcall check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file holding an array of raw submissions.
    pub file: PathBuf,
}

#[derive(Tabled)]
struct CheckTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "verdict")]
    verdict: String,
    #[tabled(rename = "errors")]
    errors: String,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let submissions = load_submissions(&self.file)?;

        let mut rejected = 0usize;
        let rows: Vec<CheckTableRow> = submissions
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let v = validate(raw);
                let accepted = v.accepted();
                if !accepted {
                    rejected += 1;
                }
                CheckTableRow {
                    position: index + 1,
                    name: display_name(raw),
                    verdict: if accepted {
                        "ok".green().to_string()
                    } else {
                        "rejected".red().to_string()
                    },
                    errors: v
                        .field_errors
                        .iter()
                        .map(|(field, message)| format!("{field}: {message}"))
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            })
            .collect();

        let total = rows.len();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("{} submissions, {} rejected", total, rejected);

        if rejected > 0 {
            bail!("{rejected} of {total} submissions rejected");
        }
        Ok(())
    }
}

fn display_name(raw: &RawSubmission) -> String {
    let name = format!("{} {}", raw.first_name.trim(), raw.last_name.trim());
    let name = name.trim().to_string();
    if name.is_empty() {
        "(unnamed)".to_string()
    } else {
        name
    }
}
