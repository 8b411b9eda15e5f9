//! 按行读取的提示后端
//!
//! 用于非 TTY 输入：每个答案占一行，输入结束视为取消。

use colored::*;
use std::io::{BufRead, Write};

use super::{ConfirmPrompt, PromptError, Prompter, TextPrompt};

pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 取回底层读写端（测试里用来检查输出）
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            writeln!(self.output)?;
            return Err(PromptError::Cancelled);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(
        &mut self,
        prompt: &TextPrompt<'_>,
        on_state: &mut dyn FnMut(&str),
    ) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{} {} ", "?".cyan(), prompt.message.bold())?;
            if let Some(initial) = prompt.initial {
                write!(self.output, "{} ", format!("({})", initial).dimmed())?;
            }
            write!(self.output, "› ")?;
            self.output.flush()?;

            let raw = self.read_answer()?;
            on_state(&raw);

            let value = prompt.resolve(&raw);
            match prompt.check(&value) {
                Ok(()) => return Ok(value),
                Err(msg) => writeln!(self.output, "{}", msg.red())?,
            }
        }
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool, PromptError> {
        loop {
            write!(
                self.output,
                "{} {} {} › ",
                "?".cyan(),
                prompt.message.bold(),
                prompt.hint().dimmed()
            )?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(prompt.initial),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer y or n".red())?,
            }
        }
    }
}
