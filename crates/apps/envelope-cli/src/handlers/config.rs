use anyhow::Result;
use envelope_core::config::{CONFIG_KEYS, ConfigManager};
use envelope_core::env::get_base_dir;

use crate::ui::Layout;

pub fn handle_config(get: Option<String>, set: Option<String>, reset: bool) -> Result<()> {
    let base_dir = get_base_dir()?;
    let mut config = ConfigManager::new(&base_dir)?;
    let layout = super::layout_builder(&config.config)
        .label_width(28)
        .build();

    if reset {
        layout.header_dashboard("CONFIG");
        layout.info("Resetting config to defaults...");
        config.reset()?;
        layout.success("Config reset to defaults");
        return Ok(());
    }

    if let Some(key) = get {
        layout.header_dashboard("CONFIG");
        layout.section_branch("cf", "Setting");
        match config.get(&key) {
            Ok(value) => layout.row_labeled("◆", &key, &value),
            Err(e) => layout.error(&e.to_string()),
        }
        layout.section_end();
        return Ok(());
    }

    if let Some(key_value) = set {
        layout.header_dashboard("CONFIG");
        let Some((key, value)) = key_value.split_once('=') else {
            layout.error("Usage: envelope config --set key=value");
            return Ok(());
        };
        let (key, value) = (key.trim(), value.trim());
        match config.set(key, value) {
            Ok(()) => layout.success(&format!("Set {} = {}", key, value)),
            Err(e) => {
                log::debug!("Rejected config update {}={}: {:?}", key, value, e);
                layout.error(&e.to_string());
            }
        }
        return Ok(());
    }

    render_all(&layout, &config)
}

fn render_all(layout: &Layout, config: &ConfigManager) -> Result<()> {
    layout.header_dashboard("CONFIGURATION");
    layout.section_branch("cf", "Current Settings");
    for key in CONFIG_KEYS {
        layout.row_labeled("", key, &config.get(key)?);
    }
    layout.section_end();
    layout.empty();
    layout.badge_info("FILE", &config.path().display().to_string());
    layout.footer_hint("Use 'envelope config --set key=value' to change settings");
    Ok(())
}
