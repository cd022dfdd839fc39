//! Palette report generation for decorated lists.
//!
//! This module provides structures and formatters for dumping the colors a
//! gradient run assigned to each list item.

use serde::Serialize;

use crate::color::Rgb;
use crate::decorate::DecoratedGroup;

/// One list item paired with its assigned color.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteEntry {
    pub text: String,
    pub color: String,
}

/// One decorated group's palette.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteGroup {
    pub entries: Vec<PaletteEntry>,
}

/// Complete palette report for one input.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    /// Name of the list source (usually the input file).
    pub source: String,
    pub start: String,
    pub end: String,
    pub groups: Vec<PaletteGroup>,
}

impl PaletteReport {
    /// Build a report from decorated groups.
    pub fn from_decorated(
        source: &str,
        start: Rgb,
        end: Rgb,
        groups: &[DecoratedGroup],
    ) -> Self {
        let groups = groups
            .iter()
            .map(|g| PaletteGroup {
                entries: g
                    .items
                    .iter()
                    .map(|item| PaletteEntry {
                        text: item.text.clone(),
                        color: item.color.to_hex(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            source: source.to_string(),
            start: start.to_hex(),
            end: end.to_hex(),
            groups,
        }
    }

    /// Total items across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Trait for formatting palette reports.
/// Implement this trait to add new output formats.
pub trait PaletteFormatter {
    fn format(&self, report: &PaletteReport) -> String;
}

/// Text table formatter for terminal output.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Minimum width for the item column.
    pub min_text_width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { min_text_width: 24 }
    }
}

impl PaletteFormatter for TextFormatter {
    fn format(&self, report: &PaletteReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Palette for {} ({} → {}, {} items)\n",
            report.source,
            report.start,
            report.end,
            report.total_items(),
        ));

        let max_text_len = report
            .groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .map(|e| e.text.len())
            .max()
            .unwrap_or(0)
            .max(self.min_text_width);

        let separator = "─".repeat(max_text_len + 12);

        for (i, group) in report.groups.iter().enumerate() {
            output.push_str(&separator);
            output.push('\n');
            output.push_str(&format!(
                "Group {} ({} items)\n",
                i + 1,
                group.entries.len()
            ));
            for entry in &group.entries {
                output.push_str(&format!(
                    "{:<width$}  {}\n",
                    entry.text,
                    entry.color,
                    width = max_text_len
                ));
            }
        }

        output.push_str(&separator);
        output.push('\n');

        output
    }
}

/// JSON formatter, pretty-printed.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl PaletteFormatter for JsonFormatter {
    fn format(&self, report: &PaletteReport) -> String {
        // Plain strings and vectors serialize infallibly.
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
