//! 交互式提示
//!
//! 两种后端：
//! - `TerminalPrompter`：stdin 是 TTY 时使用 crossterm raw mode 逐键编辑
//! - `LinePrompter`：管道输入（以及测试）按行读取答案
//!
//! 会话逻辑只依赖 `Prompter` trait，不关心具体后端。

pub mod line;
pub mod terminal;

pub use line::LinePrompter;
pub use terminal::TerminalPrompter;

use std::io::{self, IsTerminal};
use thiserror::Error;

/// 提示失败
#[derive(Debug, Error)]
pub enum PromptError {
    /// 用户中断（Esc / Ctrl-C / 输入结束）
    #[error("prompt cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// 校验函数：通过返回 Ok，否则返回要展示给用户的提示
pub type Validator = fn(&str) -> Result<(), &'static str>;

/// 文本输入提示
pub struct TextPrompt<'a> {
    pub message: &'a str,
    /// 输入为空时提交的默认值
    pub initial: Option<&'a str>,
    pub validate: Option<Validator>,
}

impl<'a> TextPrompt<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            initial: None,
            validate: None,
        }
    }

    pub fn with_initial(mut self, initial: &'a str) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    /// 把原始输入换算成提交值（空输入取默认值）
    pub fn resolve(&self, raw: &str) -> String {
        match self.initial {
            Some(initial) if raw.is_empty() => initial.to_string(),
            _ => raw.to_string(),
        }
    }

    /// 对提交值执行校验
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        match self.validate {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

/// 是/否确认提示
pub struct ConfirmPrompt {
    pub message: String,
    /// 直接回车时的答案
    pub initial: bool,
}

impl ConfirmPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            initial: false,
        }
    }

    pub(crate) fn hint(&self) -> &'static str {
        if self.initial {
            "(Y/n)"
        } else {
            "(y/N)"
        }
    }
}

/// 提示后端
pub trait Prompter {
    /// 询问一段文本
    ///
    /// `on_state` 在输入值每次变化时被调用，参数为当前原始输入，
    /// 调用方借此在提交前就能拿到实时值。
    fn text(
        &mut self,
        prompt: &TextPrompt<'_>,
        on_state: &mut dyn FnMut(&str),
    ) -> Result<String, PromptError>;

    /// 询问是/否
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError>;
}

/// 按 stdin 是否为终端选择后端
pub fn stdio_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_empty(value: &str) -> Result<(), &'static str> {
        if value.is_empty() {
            Err("required")
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_resolve_uses_initial_only_when_empty() {
        let prompt = TextPrompt::new("Project name:").with_initial("njs");
        assert_eq!(prompt.resolve(""), "njs");
        assert_eq!(prompt.resolve("demo"), "demo");

        let bare = TextPrompt::new("Package name:");
        assert_eq!(bare.resolve(""), "");
    }

    #[test]
    fn test_check_runs_validator() {
        let prompt = TextPrompt::new("Name:").with_validator(reject_empty);
        assert_eq!(prompt.check(""), Err("required"));
        assert!(prompt.check("x").is_ok());
        assert!(TextPrompt::new("Name:").check("").is_ok());
    }

    #[test]
    fn test_confirm_hint_follows_initial() {
        let mut prompt = ConfirmPrompt::new("Continue?");
        assert_eq!(prompt.hint(), "(y/N)");
        prompt.initial = true;
        assert_eq!(prompt.hint(), "(Y/n)");
    }
}
