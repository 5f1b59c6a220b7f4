//! Report rendering
//!
//! Text output mirrors the listing blocks admins are used to from the
//! media-library tool (`MISSING META`, `CURRENT META`, `PROPOSED META`,
//! `OLD META` / `NEW META`). JSON output is the serde form of the entries
//! plus a summary.

use crate::models::{BatchSummary, EntryOutcome, ReportEntry, ReportMode};
use serde::Serialize;
use std::io::{self, Write};

/// Output format of the command-line host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write one text block per entry
pub fn render_text<W: Write>(out: &mut W, entries: &[ReportEntry]) -> io::Result<()> {
    for entry in entries {
        render_entry(out, entry)?;
        writeln!(out)?;
    }
    Ok(())
}

fn render_entry<W: Write>(out: &mut W, entry: &ReportEntry) -> io::Result<()> {
    let current = &entry.current;

    match entry.mode {
        ReportMode::ReportMissing | ReportMode::ReportAll => {
            let heading = if entry.mode == ReportMode::ReportMissing {
                "MISSING META"
            } else {
                "CURRENT META"
            };
            writeln!(out, "{}", heading)?;
            writeln!(out, "ID: {}", entry.id)?;
            writeln!(out, "Title: {}", current.title)?;
            writeln!(out, "Caption: {}", current.caption)?;
            writeln!(out, "Alt: {}", current.alt_text)?;
        }
        ReportMode::ReportProposed => {
            writeln!(out, "# CURRENT META")?;
            writeln!(out, "ID: {}", entry.id)?;
            writeln!(out, "Title: {}", current.title)?;
            writeln!(out, "Caption: {}", current.caption)?;
            writeln!(out, "Alt: {}", current.alt_text)?;
            if let Some(proposed) = &entry.proposed {
                writeln!(out)?;
                writeln!(out, "# PROPOSED META")?;
                writeln!(out, "Clean title: {}", proposed.cleaned_title)?;
                writeln!(out, "Clean caption: {}", proposed.cleaned_caption)?;
                writeln!(out, "New Alt: {}", proposed.inferred_alt)?;
            }
        }
        ReportMode::Commit => {
            writeln!(out, "# OLD META")?;
            writeln!(out, "ID: {}", entry.id)?;
            writeln!(out, "Title: {}", current.title)?;
            writeln!(out, "Description: {}", current.description)?;
            writeln!(out, "Caption: {}", current.caption)?;
            writeln!(out, "Alt: {}", current.alt_text)?;
            writeln!(out)?;
            match (&entry.outcome, &entry.updated) {
                (EntryOutcome::Failed { error }, _) => {
                    writeln!(out, "Error!")?;
                    writeln!(out, "{}", error)?;
                }
                (_, Some(updated)) => {
                    writeln!(out, "# NEW META")?;
                    writeln!(out, "Clean title: {}", updated.title)?;
                    writeln!(out, "Description: {}", updated.description)?;
                    writeln!(out, "Clean caption: {}", updated.caption)?;
                    writeln!(out, "New Alt: {}", updated.alt_text)?;
                }
                (_, None) => {}
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    mode: ReportMode,
    summary: BatchSummary,
    entries: &'a [ReportEntry],
}

/// Write the whole report as one pretty-printed JSON document
pub fn render_json<W: Write>(out: &mut W, mode: ReportMode, entries: &[ReportEntry]) -> serde_json::Result<()> {
    let report = JsonReport {
        mode,
        summary: BatchSummary::from_entries(entries),
        entries,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
