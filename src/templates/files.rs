//! 模板文件
//!
//! 默认使用编译时嵌入的 `template/` 目录；也可以指向磁盘上的模板目录。
//! 两种来源都只看顶层文件。

use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::InitError;
use crate::utils::{copy_file, write_file};

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "template/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 列出所有顶层模板文件（已排序）
    pub fn list_templates() -> Vec<String> {
        let mut names: Vec<String> = Self::iter()
            .filter(|path| !path.contains('/'))
            .map(|path| path.into_owned())
            .collect();
        names.sort();
        names
    }

    /// 读取指定模板文件的原始字节
    pub fn get_bytes(filename: &str) -> Result<Cow<'static, [u8]>, InitError> {
        Self::get(filename)
            .map(|file| file.data)
            .ok_or_else(|| InitError::Template {
                name: filename.to_string(),
            })
    }
}

/// 模板来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// 二进制内嵌模板
    Embedded,
    /// 磁盘上的模板目录
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        dir.map(TemplateSource::Directory)
            .unwrap_or(TemplateSource::Embedded)
    }

    /// 顶层文件名（已排序），子目录被跳过
    pub fn entries(&self) -> Result<Vec<String>> {
        match self {
            TemplateSource::Embedded => Ok(TemplateAssets::list_templates()),
            TemplateSource::Directory(dir) => {
                let read = fs::read_dir(dir)
                    .with_context(|| format!("Failed to read template directory: {}", dir.display()))?;

                let mut names = Vec::new();
                for entry in read {
                    let entry = entry.with_context(|| {
                        format!("Failed to read template directory: {}", dir.display())
                    })?;
                    if entry.path().is_file() {
                        names.push(entry.file_name().to_string_lossy().into_owned());
                    }
                }
                names.sort();
                Ok(names)
            }
        }
    }

    /// 读取模板文件内容
    pub fn read(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        match self {
            TemplateSource::Embedded => Ok(TemplateAssets::get_bytes(name)?),
            TemplateSource::Directory(dir) => {
                let path = dir.join(name);
                let data = fs::read(&path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok(Cow::Owned(data))
            }
        }
    }

    /// 原样复制模板文件到 `dest`
    pub fn copy_to(&self, name: &str, dest: &Path) -> Result<()> {
        match self {
            TemplateSource::Embedded => write_file(dest, &TemplateAssets::get_bytes(name)?),
            TemplateSource::Directory(dir) => copy_file(&dir.join(name), dest),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_templates() {
        let templates = TemplateAssets::list_templates();
        assert!(templates.contains(&"package.json".to_string()));
        assert!(templates.contains(&"hello.ts".to_string()));
        assert!(templates.contains(&"tsconfig.json".to_string()));
    }

    #[test]
    fn test_embedded_package_json_is_object() {
        let data = TemplateAssets::get_bytes("package.json").unwrap();
        let pkg: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert!(pkg.is_object());
        assert!(pkg["name"].is_string());
    }

    #[test]
    fn test_missing_embedded_file() {
        let err = TemplateAssets::get_bytes("nope.txt").unwrap_err();
        assert!(matches!(err, InitError::Template { .. }));
    }

    #[test]
    fn test_directory_source_skips_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.ts"), "b").unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.txt"), "c").unwrap();

        let source = TemplateSource::Directory(temp.path().to_path_buf());
        assert_eq!(source.entries().unwrap(), vec!["a.md", "b.ts"]);
        assert_eq!(source.read("b.ts").unwrap().as_ref(), b"b");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(TemplateSource::from_option(None), TemplateSource::Embedded);
        assert_eq!(
            TemplateSource::from_option(Some(PathBuf::from("/t"))),
            TemplateSource::Directory(PathBuf::from("/t"))
        );
    }
}
