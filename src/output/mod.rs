//! Output formatting module

pub mod prompt;
pub mod render;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
use serde_json::Value;
use std::io::{self, Write};

pub use prompt::TerminalPrompt;
pub use styles::Styles;

/// 24fire CLI 橫幅
const BANNER: &str = r#"
 .d8888b.     d8888  .d888d8b                   .d8888b. 888     8888888
d88P  Y88b   d8P888 d88P" Y8P                  d88P  Y88b888       888
       888  d8P 888 888                        888    888888       888
     .d88P d8P  888 888888888888d888 .d88b.    888       888       888
 .od888P" d88   888 888   888888P"  d8P  Y8b   888       888       888
d88P"     8888888888888   888888    88888888   888    888888       888
888"            888 888   888888    Y8b.       Y88b  d88P888       888
888888888       888 888   888888     "Y8888     "Y8888P" 888888888888888
"#;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, is_tty }
    }

    /// 印出開頭橫幅
    pub fn banner(&self) {
        println!("{}", BANNER.style(self.styles.banner));
    }

    /// 服務清單的單行項目："{number}. {name}"
    pub fn service_line(&self, number: usize, name: &str) {
        println!("{}", format!("{}. {}", number, name).style(self.styles.item));
    }

    /// Print a short notice such as "No services found.".
    pub fn notice(&self, message: &str) {
        println!("{}", message.style(self.styles.notice));
    }

    /// Print a title preceded by a blank line.
    pub fn section(&self, title: &str) {
        println!("\n{}", title.style(self.styles.title));
    }

    /// 將詳細資訊 JSON 遞迴渲染到 stdout
    pub fn render_details(&self, payload: &Value) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render::write_value(&mut out, &self.styles, payload)?;
        out.flush()
    }
}
