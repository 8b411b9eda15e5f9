//! 文件系统工具

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 安全写入文件
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    // 确保父目录存在
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// 路径存在且至少有一个条目
///
/// 不存在的路径视为空；存在但不是目录时返回读取目录的错误。
pub fn is_non_empty_dir(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    Ok(entries.next().is_some())
}

/// 创建目录（包括父目录），已存在时什么也不做
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// 清空目录：删除所有子条目，目录本身保留；不存在时创建
pub fn empty_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return ensure_dir(path);
    }

    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", path.display()))?;
        let child = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {}", child.display()))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&child)
        } else {
            fs::remove_file(&child)
        }
        .with_context(|| format!("Failed to remove: {}", child.display()))?;
    }

    Ok(())
}

/// 按字节复制文件
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}
