//! Show command implementation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;

use super::ShowArgs;
use crate::ui::PreferenceBox;

/// Run the show command.
///
/// Mounting applies the stored preference, so the printed markers are the
/// ones a styling layer in this process would read.
pub fn run(args: &ShowArgs, store_override: Option<&PathBuf>) -> Result<()> {
    let config = super::load_config();
    let picker = super::mounted_picker(&config, config.picker, store_override)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report(&picker))?);
        return Ok(());
    }

    println!();
    PreferenceBox::new(picker.preferences()).display();
    println!();
    for (attribute, value) in picker.applicator().board().attributes() {
        println!("  {attribute}=\"{value}\"");
    }
    println!();

    Ok(())
}

/// The `--json` document for a mounted picker.
fn report<S: KeyValueStore>(picker: &PickerController<S>) -> serde_json::Value {
    let markers = picker.applicator().board().snapshot();

    serde_json::json!({
        "preferences": picker.preferences(),
        "theme": picker.current_theme(),
        "markers": markers,
        "attributes": markers
            .attributes()
            .into_iter()
            .collect::<BTreeMap<_, _>>(),
    })
}
