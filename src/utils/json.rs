//! JSON 工具

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::utils::write_file;

/// 序列化为 2 空格缩进的 JSON，末尾带换行
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    let mut json = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;
    json.push('\n');
    Ok(json)
}

/// 写入 JSON 文件（格式化）
pub fn write_json<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize,
{
    let json = to_json_pretty(data)?;
    write_file(path, json.as_bytes())
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
