use crate::domain::ports::Prompt;
use crate::utils::error::Result;
use dialoguer::Input;

/// 終端互動輸入，空字串直接交回由驗證層拒絕
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }
}
