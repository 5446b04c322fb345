//! Migration summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::migrate::{LinkConfig, NormalizeStats};

/// Summary of one config migration
#[derive(Debug, Default)]
pub struct MigrationSummary {
    pub version: i64,
    pub links: usize,
    pub tags: usize,
    pub defaults_filled: usize,
    pub uuids_generated: usize,
    pub tags_dropped: usize,
}

impl MigrationSummary {
    pub fn new(config: &LinkConfig, stats: &NormalizeStats) -> Self {
        Self {
            version: config.version,
            links: config.program_links.len(),
            tags: config.tags.len(),
            defaults_filled: stats.defaults_filled,
            uuids_generated: stats.uuids_generated,
            tags_dropped: stats.tags_dropped,
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "  {} {}",
            style("📋").cyan(),
            style("MIGRATION SUMMARY").white().bold()
        );
        println!("  {}", style("─".repeat(40)).dim());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Schema version"),
            Cell::new(self.version)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("Links"), Cell::new(self.links)]);
        table.add_row(vec![Cell::new("Tags"), Cell::new(self.tags)]);
        table.add_row(vec![
            Cell::new("Defaults filled"),
            Cell::new(self.defaults_filled).fg(if self.defaults_filled == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("UUIDs generated"),
            Cell::new(self.uuids_generated).fg(if self.uuids_generated == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![
            Cell::new("Unknown tags dropped"),
            Cell::new(self.tags_dropped).fg(if self.tags_dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("  {}", line);
        }
        println!();
    }
}
