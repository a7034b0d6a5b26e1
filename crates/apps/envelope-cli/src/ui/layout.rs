use crate::theme::Theme;
use crossterm::style::{Color, Stylize};

pub struct LayoutBuilder {
    theme: Option<Theme>,
    label_width: usize,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            theme: None,
            label_width: 22,
        }
    }

    pub fn theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = Some(theme);
        self
    }

    pub fn label_width(&mut self, width: usize) -> &mut Self {
        self.label_width = width;
        self
    }

    pub fn build(&self) -> Layout {
        Layout {
            theme: self.theme.unwrap_or_default(),
            label_width: self.label_width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    theme: Theme,
    label_width: usize,
}

impl Layout {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::new()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn pad(&self, label: &str) -> String {
        format!("{:<width$}", label, width = self.label_width)
    }

    pub fn header_dashboard(&self, title: &str) {
        println!();
        println!("  {}", title.to_uppercase().with(self.theme.info).bold());
        let bar = "━".repeat(title.chars().count() + 4);
        println!("  {}", bar.with(self.theme.info));
        println!("{}", "│".with(self.theme.text_bright));
    }

    pub fn section_branch(&self, code: &str, title: &str) {
        self.section_colored(code, title, self.theme.accent);
    }

    /// Section header whose code tag carries a metric family's color.
    pub fn section_colored(&self, code: &str, title: &str, color: Color) {
        println!(
            "{}╭┄ {} [{}]",
            "│".with(self.theme.text_bright),
            code.with(color).bold(),
            title.with(self.theme.text_bright).bold()
        );
    }

    pub fn section_end(&self) {
        println!("{}", "├╯".with(self.theme.text_bright));
        println!("{}", "│".with(self.theme.text_bright));
    }

    pub fn row_labeled(&self, icon: &str, label: &str, value: &str) {
        if icon.is_empty() {
            println!(
                "{} {} {}",
                "│".with(self.theme.text_bright),
                self.pad(label).with(self.theme.text_muted),
                value.with(self.theme.text_bright).bold()
            );
        } else {
            println!(
                "{} {} {} {}",
                "│".with(self.theme.text_bright),
                icon.with(self.theme.text),
                self.pad(label).with(self.theme.text_muted),
                value.with(self.theme.text_bright).bold()
            );
        }
    }

    /// Metric row: value in the family color, optional raw figure dimmed.
    pub fn row_metric(&self, color: Color, label: &str, value: &str, raw: Option<&str>) {
        let raw = raw
            .map(|r| format!("  ({})", r))
            .unwrap_or_default();
        println!(
            "{} {} {} {}",
            "│".with(color),
            self.pad(label).with(self.theme.text_muted),
            value.with(color).bold(),
            raw.with(self.theme.text_muted)
        );
    }

    /// Two values for the same metric, e.g. approximate vs exact.
    pub fn row_compare(&self, label: &str, left: &str, right: &str) {
        println!(
            "{} {} {} {}",
            "│".with(self.theme.text_bright),
            self.pad(label).with(self.theme.text_muted),
            format!("{:<18}", left).with(self.theme.traffic),
            right.with(self.theme.storage)
        );
    }

    pub fn footer_hint(&self, hint: &str) {
        println!(
            "  {} {}",
            "💡".with(self.theme.warning),
            hint.with(self.theme.text_muted)
        );
    }

    pub fn success(&self, message: &str) {
        println!(
            "{}   {} {}",
            "┊".with(self.theme.text),
            "✓".with(self.theme.success),
            message.with(self.theme.success)
        );
    }

    pub fn error(&self, message: &str) {
        println!(
            "{}   {} {}",
            "┊".with(self.theme.text),
            "✗".with(self.theme.error),
            message.with(self.theme.error)
        );
    }

    pub fn info(&self, message: &str) {
        println!(
            "{}   {} {}",
            "┊".with(self.theme.text),
            "ℹ".with(self.theme.info),
            message.with(self.theme.info)
        );
    }

    pub fn empty(&self) {
        println!();
    }

    pub fn badge_success(&self, label: &str, value: &str) {
        println!(
            "{}  {} {}",
            "┄".with(self.theme.success),
            format!("[{}]", label).with(self.theme.success).bold(),
            value.with(self.theme.text)
        );
    }

    pub fn badge_info(&self, label: &str, value: &str) {
        println!(
            "{}  {} {}",
            "┄".with(self.theme.info),
            format!("[{}]", label).with(self.theme.info).bold(),
            value.with(self.theme.text)
        );
    }

    pub fn badge_warning(&self, label: &str, value: &str) {
        println!(
            "{}  {} {}",
            "┄".with(self.theme.warning),
            format!("[{}]", label).with(self.theme.warning).bold(),
            value.with(self.theme.text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let layout = Layout::builder().build();
        assert_eq!(*layout.theme(), Theme::default());
        assert_eq!(layout.pad("RPS").len(), 22);
    }

    #[test]
    fn test_builder_overrides() {
        let layout = Layout::builder()
            .theme(Theme::monochrome())
            .label_width(8)
            .build();
        assert_eq!(*layout.theme(), Theme::monochrome());
        assert_eq!(layout.pad("Read"), "Read    ");
        // Labels wider than the column are never truncated.
        assert_eq!(layout.pad("Replicated storage"), "Replicated storage");
    }
}
