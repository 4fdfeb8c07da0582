//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Startup banner (green)
    pub banner: Style,
    /// Numbered service list entries (blue)
    pub item: Style,
    /// Leaf keys in the detail view (blue)
    pub key: Style,
    /// Section headers for nested values (cyan)
    pub section: Style,
    /// Titles ("Service Information:")
    pub title: Style,
    /// Notices such as "No services found." (red)
    pub notice: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.banner = Style::new().green();
        self.item = Style::new().blue();
        self.key = Style::new().blue();
        self.section = Style::new().cyan();
        self.title = Style::new().bold();
        self.notice = Style::new().red();
    }
}
