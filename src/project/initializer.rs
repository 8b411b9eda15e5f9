//! 项目初始化
//!
//! 询问 → 准备目标目录 → 写入模板 → 打印后续步骤

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use super::{destination, report, Session};
use crate::prompt::Prompter;
use crate::templates::{materialize, TemplateSource};

/// 初始化参数
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// 工作目录
    pub cwd: PathBuf,
    /// 命令行给出的目标目录
    pub target_dir: Option<String>,
    pub template: TemplateSource,
}

/// 初始化项目，返回写入的目标目录
pub fn init_project(options: &InitOptions, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    println!(
        "{}",
        "💿 Welcome to njs! Let's get you set up with a new project.".bold()
    );
    println!();

    let answers = Session::new(&options.cwd, options.target_dir.clone()).run(prompter)?;

    // 会话成功后才开始写文件系统
    let root = destination::resolve_root(&options.cwd, &answers.target_dir);
    destination::prepare(&root, answers.clear_existing)?;
    materialize(&options.template, &root, &answers.package_name)?;

    report::print_completion(&options.cwd, &root);

    Ok(root)
}
