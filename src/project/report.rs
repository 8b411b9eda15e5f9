//! 完成提示

use colored::*;
use std::path::Path;

use crate::utils::path::{normalize, relative};

/// 交给用户手动执行的后续命令
pub const NEXT_STEPS: [&str; 2] = ["pnpm install", "pnpm dev"];

/// 生成完成提示中需要执行的命令列表
///
/// 目标目录不是工作目录时，第一条是相对路径的 `cd`。
pub fn next_commands(cwd: &Path, root: &Path) -> Vec<String> {
    let mut commands = Vec::new();

    if normalize(root) != normalize(cwd) {
        commands.push(format!("cd {}", relative(cwd, root).display()));
    }
    commands.extend(NEXT_STEPS.iter().map(|cmd| cmd.to_string()));
    commands
}

pub fn print_completion(cwd: &Path, root: &Path) {
    println!();
    println!("{}", "Done. Now run:".green().bold());
    println!();
    for command in next_commands(cwd, root) {
        println!("  {}", command.cyan());
    }
}
