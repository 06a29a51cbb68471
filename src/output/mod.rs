//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including record lines, facet menus, filter chips and the list footer.

use crate::browse::{ActiveFilterChip, ExplorerView, LoadMore};
use crate::filters::FacetOption;
use crate::records::{GalleryEntry, Record, RecordKind};
use byte_unit::{Byte, UnitType};
use colored::Colorize;

/// Human readable size, or `-` when unknown
#[must_use]
pub fn format_size(bytes: Option<u64>) -> String {
    bytes.map_or_else(
        || "-".to_string(),
        |b| format!("{:.1}", Byte::from_u64(b).get_appropriate_unit(UnitType::Binary)),
    )
}

/// Format a record for display
///
/// In quiet mode only the id is printed, one per line, for scripting.
#[must_use]
pub fn record_line(record: &Record, quiet: bool) -> String {
    if quiet {
        return record.id.clone();
    }

    let owner = if record.owner.display_name.is_empty() {
        &record.owner.id
    } else {
        &record.owner.display_name
    };

    let detail = match &record.kind {
        RecordKind::Gallery(g) => format!("{} entries", g.entries.len()),
        RecordKind::Model(_) | RecordKind::Image(_) => format_size(record.file_size()),
    };

    let tags: Vec<&str> = record.tags().iter().map(|t| t.label.as_str()).collect();
    let mut line = format!(
        "  {} {} by {} ({}, {}, {})",
        record.title.bold(),
        format!("[{}]", record.id).dimmed(),
        owner.cyan(),
        detail,
        record.visibility,
        record.updated_at.format("%Y-%m-%d"),
    );
    if !tags.is_empty() {
        line.push_str(&format!(" [{}]", tags.join(", ")).yellow().to_string());
    }
    line
}

/// Format one facet menu entry with its count
#[must_use]
pub fn facet_option(option: &FacetOption, quiet: bool) -> String {
    if quiet {
        return option.id.clone();
    }
    format!("  {} ({}) {}", option.label, option.count, option.id.dimmed())
}

/// Format a facet group heading followed by its options
#[must_use]
pub fn facet_group(title: &str, options: &[FacetOption], quiet: bool) -> String {
    let mut out = String::new();
    if !quiet {
        out.push_str(&format!("{}\n", title.bold()));
    }
    if options.is_empty() && !quiet {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
    }
    for option in options {
        out.push_str(&facet_option(option, quiet));
        out.push('\n');
    }
    out
}

/// Format the active filter chips on one line
#[must_use]
pub fn chips_line(chips: &[ActiveFilterChip]) -> String {
    chips
        .iter()
        .map(|chip| format!("[{} x]", chip.label).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the "load more" affordance
#[must_use]
pub fn load_more_line(load_more: LoadMore) -> String {
    format!(
        "Load {} more ({} remaining)",
        load_more.next, load_more.remaining
    )
    .blue()
    .to_string()
}

/// Format the status line of a view
#[must_use]
pub fn summary_line(view: &ExplorerView<'_>) -> String {
    let summary = view.summary();
    if view.total == 0 {
        summary.yellow().to_string()
    } else {
        summary.green().to_string()
    }
}

/// Format a gallery with its chosen preview image
#[must_use]
pub fn preview_line(record: &Record, entry: Option<&GalleryEntry>, quiet: bool) -> String {
    let preview = entry.and_then(|e| e.asset.as_ref());
    if quiet {
        return format!("{}\t{}", record.id, preview.map_or("", |a| a.id.as_str()));
    }
    match preview {
        Some(asset) => format!(
            "  {} {} {} {}",
            record.title.bold(),
            "->".dimmed(),
            asset.title,
            format!("[{}]", asset.id).dimmed()
        ),
        None => format!("  {} {}", record.title.bold(), "(no images)".dimmed()),
    }
}
