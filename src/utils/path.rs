//! 路径工具
//!
//! 纯词法处理，不访问文件系统，也不解析符号链接。

use std::path::{Component, Path, PathBuf};

/// 规整路径：去掉 `.`，折叠 `..`
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// 以 `base` 为基准解析 `target`（`target` 为绝对路径时直接使用）
pub fn resolve(base: &Path, target: &str) -> PathBuf {
    normalize(&base.join(target))
}

/// 计算从 `from` 到 `to` 的相对路径；两者相同时返回空路径
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let from_comps: Vec<Component> = from.components().collect();
    let to_comps: Vec<Component> = to.components().collect();

    let common = from_comps
        .iter()
        .zip(to_comps.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_comps.len() {
        out.push("..");
    }
    for comp in &to_comps[common..] {
        out.push(comp.as_os_str());
    }
    out
}
