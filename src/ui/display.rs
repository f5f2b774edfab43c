//! Display utilities for shred results.

use std::path::Path;

use bytesize::ByteSize;
use console::style;
use shredder::Summary;

/// One-line description of what was destroyed.
pub fn describe(path: &Path, summary: Summary) -> String {
    let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let passes = if summary.passes == 1 { "pass" } else { "passes" };

    format!("Shredded {name} ({}, {} {passes})", ByteSize::b(summary.bytes), summary.passes)
}

/// Displays success message.
pub fn show_success(path: &Path, summary: Summary) {
    println!("{} {}", style("✓").green(), style(describe(path, summary)).bold());
}
