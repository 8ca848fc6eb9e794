//! List command implementation.

use std::path::PathBuf;

use anyhow::Result;
use lumiq_core::catalog::{self, ThemeRecord};
use lumiq_core::preferences::PreferenceStore;
use lumiq_core::storage::FileStore;
use serde::Serialize;

use super::ListArgs;
use crate::ui;

/// A catalog entry in `--json` output.
#[derive(Serialize)]
struct ListedTheme<'a> {
    #[serde(flatten)]
    record: &'a ThemeRecord,
    current: bool,
}

/// Run the list command.
pub fn run(args: &ListArgs, store_override: Option<&PathBuf>) -> Result<()> {
    let config = super::load_config();
    let store = FileStore::new(super::store_path(&config, store_override)?);
    let current = PreferenceStore::with_default_theme(store, config.picker.current_theme)
        .load_or_default()
        .selected_theme;

    if args.json {
        let themes: Vec<_> = catalog::list_themes()
            .iter()
            .map(|record| ListedTheme {
                record,
                current: record.id == current,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&themes)?);
        return Ok(());
    }

    println!();
    println!("  Lumiq themes");
    println!("  {}", "─".repeat(60));
    for record in catalog::list_themes() {
        println!("{}", ui::theme_row(record, record.id == current));
    }
    println!();
    println!("  Select one with: lumiq set <id>");
    println!();

    Ok(())
}
