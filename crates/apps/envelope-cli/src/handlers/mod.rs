pub mod compare;
pub mod config;
pub mod estimate;
pub mod format;

use crate::theme::Theme;
use crate::ui::{Layout, LayoutBuilder};
use envelope_core::config::Config;

/// Layout honoring the `color` setting.
pub(crate) fn layout_for(config: &Config) -> Layout {
    layout_builder(config).build()
}

pub(crate) fn layout_builder(config: &Config) -> LayoutBuilder {
    let mut builder = Layout::builder();
    builder.theme(Theme::for_color(config.color));
    builder
}
