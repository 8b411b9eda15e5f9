//! 目标目录解析与准备

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::utils::{empty_dir, ensure_dir, is_non_empty_dir, path};

/// 提示和错误信息里对目标目录的称呼
pub fn target_label(target_dir: &str) -> String {
    if target_dir == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{}\"", target_dir)
    }
}

/// 目标目录的绝对路径
pub fn resolve_root(cwd: &Path, target_dir: &str) -> PathBuf {
    path::resolve(cwd, target_dir)
}

/// 目标已存在且非空时需要用户确认覆盖
pub fn needs_overwrite(cwd: &Path, target_dir: &str) -> Result<bool> {
    is_non_empty_dir(&resolve_root(cwd, target_dir))
}

/// 准备目标目录
///
/// 确认过覆盖时清空已有内容，否则只保证目录存在。
pub fn prepare(root: &Path, clear_existing: bool) -> Result<()> {
    if clear_existing {
        empty_dir(root)
    } else {
        ensure_dir(root)
    }
}
