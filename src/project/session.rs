//! 提示会话
//!
//! 固定顺序的四个步骤，每一步先判断是否适用，再执行：
//!
//! 1. `ProjectName`：命令行未给出目标目录时询问，输入过程中实时更新目标目录
//! 2. `Overwrite`：目标目录存在且非空时确认是否清空
//! 3. `OverwriteCancelled`：上一步回答“否”时立即终止会话
//! 4. `PackageName`：总是询问，校验失败会重新询问
//!
//! 任意一步失败都会短路后续步骤，此时还没有任何文件系统写入。

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::destination::{needs_overwrite, target_label};
use super::package_name::validate_package_name;
use crate::error::InitError;
use crate::prompt::{ConfirmPrompt, Prompter, TextPrompt};

/// 未指定目标目录时的默认项目名
pub const DEFAULT_PROJECT_NAME: &str = "njs";

/// 会话步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ProjectName,
    Overwrite,
    OverwriteCancelled,
    PackageName,
}

impl Step {
    /// 执行顺序
    pub const SEQUENCE: [Step; 4] = [
        Step::ProjectName,
        Step::Overwrite,
        Step::OverwriteCancelled,
        Step::PackageName,
    ];
}

/// 会话完成后的答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// 目标目录（相对工作目录，或绝对路径）
    pub target_dir: String,
    /// 用户确认过清空已有内容
    pub clear_existing: bool,
    pub package_name: String,
}

/// 会话状态，按步骤逐步填充
#[derive(Debug)]
pub struct Session {
    cwd: PathBuf,
    /// 命令行给出的目标目录
    arg_target: Option<String>,
    default_name: String,
    target_dir: String,
    overwrite: Option<bool>,
    package_name: Option<String>,
    /// 已执行（未被跳过）的步骤
    #[cfg(test)]
    shown: Vec<Step>,
}

impl Session {
    pub fn new(cwd: &Path, arg_target: Option<String>) -> Self {
        let default_name = arg_target
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        Self {
            cwd: cwd.to_path_buf(),
            target_dir: default_name.clone(),
            arg_target,
            default_name,
            overwrite: None,
            package_name: None,
            #[cfg(test)]
            shown: Vec::new(),
        }
    }

    /// 实际展示过的步骤
    #[cfg(test)]
    pub fn shown_steps(&self) -> &[Step] {
        &self.shown
    }

    /// 判断步骤是否适用（不适用则跳过）
    fn applies(&self, step: Step) -> Result<bool> {
        Ok(match step {
            Step::ProjectName => self.arg_target.as_deref().map_or(true, str::is_empty),
            Step::Overwrite => needs_overwrite(&self.cwd, &self.target_dir)?,
            Step::OverwriteCancelled => self.overwrite == Some(false),
            Step::PackageName => true,
        })
    }

    fn execute(&mut self, step: Step, prompter: &mut dyn Prompter) -> Result<()> {
        match step {
            Step::ProjectName => {
                let prompt = TextPrompt::new("Project name:").with_initial(&self.default_name);
                let default_name = &self.default_name;
                let target_dir = &mut self.target_dir;

                prompter
                    .text(&prompt, &mut |raw: &str| {
                        let trimmed = raw.trim();
                        *target_dir = if trimmed.is_empty() {
                            default_name.clone()
                        } else {
                            trimmed.to_string()
                        };
                    })
                    .map_err(InitError::from)?;
            }
            Step::Overwrite => {
                let prompt = ConfirmPrompt::new(format!(
                    "⚠️ {} is not empty. Remove existing files and continue?",
                    target_label(&self.target_dir)
                ));
                let confirmed = prompter.confirm(&prompt).map_err(InitError::from)?;
                self.overwrite = Some(confirmed);
            }
            Step::OverwriteCancelled => {
                return Err(InitError::OverwriteDeclined {
                    target: target_label(&self.target_dir),
                }
                .into());
            }
            Step::PackageName => {
                let prompt = TextPrompt::new("Package name:").with_validator(validate_package_name);
                let name = prompter
                    .text(&prompt, &mut |_: &str| {})
                    .map_err(InitError::from)?;
                self.package_name = Some(name);
            }
        }
        Ok(())
    }

    /// 依次执行所有步骤，返回最终答案
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<Answers> {
        for step in Step::SEQUENCE {
            if !self.applies(step)? {
                continue;
            }
            #[cfg(test)]
            self.shown.push(step);
            self.execute(step, prompter)?;
        }

        let package_name = self.package_name.clone().ok_or(InitError::Cancelled)?;

        Ok(Answers {
            target_dir: self.target_dir.clone(),
            clear_existing: self.overwrite == Some(true),
            package_name,
        })
    }
}
