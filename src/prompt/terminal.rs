//! 终端提示后端
//!
//! 在 raw mode 下逐键读取，每次编辑都会重绘当前行并回调 `on_state`。
//! Esc / Ctrl-C / Ctrl-D 视为取消。

use colored::*;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

use super::{ConfirmPrompt, PromptError, Prompter, TextPrompt};

/// 一次按键之后文本提示的状态
#[derive(Debug, Clone, PartialEq, Eq)]
enum TextOutcome {
    /// 继续编辑（包括校验失败）
    Pending,
    Submitted(String),
    Cancelled,
}

/// 文本输入的编辑状态
#[derive(Debug, Default)]
struct TextInput {
    value: String,
    error: Option<&'static str>,
}

impl TextInput {
    /// 处理一个按键；值每次变化都会回调 `on_state`
    fn handle(
        &mut self,
        prompt: &TextPrompt<'_>,
        key: &KeyEvent,
        on_state: &mut dyn FnMut(&str),
    ) -> TextOutcome {
        if is_abort(key) {
            return TextOutcome::Cancelled;
        }

        match key.code {
            KeyCode::Enter => {
                let submitted = prompt.resolve(&self.value);
                match prompt.check(&submitted) {
                    Ok(()) => TextOutcome::Submitted(submitted),
                    Err(msg) => {
                        self.error = Some(msg);
                        TextOutcome::Pending
                    }
                }
            }
            KeyCode::Backspace => {
                self.value.pop();
                self.error = None;
                on_state(&self.value);
                TextOutcome::Pending
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                self.error = None;
                on_state(&self.value);
                TextOutcome::Pending
            }
            _ => TextOutcome::Pending,
        }
    }
}

/// 确认提示对按键的解释；`None` 表示忽略该键
fn confirm_key(key: &KeyEvent, initial: bool) -> Option<Result<bool, PromptError>> {
    if is_abort(key) {
        return Some(Err(PromptError::Cancelled));
    }

    match key.code {
        KeyCode::Enter => Some(Ok(initial)),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Ok(true)),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Ok(false)),
        _ => None,
    }
}

fn is_abort(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('d') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// 输入行里实际显示的内容（去掉颜色）：空输入时显示默认值占位
fn displayed_line(prompt: &TextPrompt<'_>, value: &str) -> String {
    let shown = match prompt.initial {
        Some(initial) if value.is_empty() => initial,
        _ => value,
    };
    format!("? {} › {}", prompt.message, shown)
}

/// 输入行末尾所在的终端列（按显示宽度计算）
fn cursor_column(prompt: &TextPrompt<'_>, value: &str) -> u16 {
    displayed_line(prompt, value).width().min(u16::MAX as usize) as u16
}

pub struct TerminalPrompter {
    out: Stdout,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// 重绘输入行；有校验错误时显示在下一行，光标回到输入末尾
    fn render_text(
        &mut self,
        prompt: &TextPrompt<'_>,
        value: &str,
        error: Option<&str>,
    ) -> io::Result<()> {
        let shown = match prompt.initial {
            Some(initial) if value.is_empty() => initial.dimmed().to_string(),
            _ => value.to_string(),
        };

        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
            Print(format!("{} {} › ", "?".cyan(), prompt.message.bold())),
            Print(shown)
        )?;

        if let Some(msg) = error {
            queue!(
                self.out,
                Print("\r\n"),
                Print(msg.red()),
                MoveUp(1),
                MoveToColumn(cursor_column(prompt, value))
            )?;
        }

        self.out.flush()
    }

    fn finish_line(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown), Print("\r\n"))?;
        self.out.flush()
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// raw mode 守卫，离开作用域时恢复终端
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn text(
        &mut self,
        prompt: &TextPrompt<'_>,
        on_state: &mut dyn FnMut(&str),
    ) -> Result<String, PromptError> {
        let _raw = RawMode::enable()?;
        let mut input = TextInput::default();

        self.render_text(prompt, &input.value, None)?;

        loop {
            let key = read_key()?;
            match input.handle(prompt, &key, on_state) {
                TextOutcome::Pending => self.render_text(prompt, &input.value, input.error)?,
                TextOutcome::Submitted(value) => {
                    self.render_text(prompt, &value, None)?;
                    self.finish_line()?;
                    return Ok(value);
                }
                TextOutcome::Cancelled => {
                    self.finish_line()?;
                    return Err(PromptError::Cancelled);
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        let _raw = RawMode::enable()?;

        queue!(
            self.out,
            MoveToColumn(0),
            Print(format!(
                "{} {} {} › ",
                "?".cyan(),
                prompt.message.bold(),
                prompt.hint().dimmed()
            ))
        )?;
        self.out.flush()?;

        let answer = loop {
            if let Some(answer) = confirm_key(&read_key()?, prompt.initial) {
                break answer;
            }
        };

        match answer {
            Ok(yes) => {
                queue!(self.out, Print(if yes { "yes" } else { "no" }))?;
                self.finish_line()?;
                Ok(yes)
            }
            Err(err) => {
                self.finish_line()?;
                Err(err)
            }
        }
    }
}
