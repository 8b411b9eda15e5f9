//! 模板落盘
//!
//! 规则：
//! - `package.json`：解析后替换 `name`，以 2 空格缩进写回
//! - `.ts` 文件：复制到 `src/` 下
//! - 其他文件：原样复制到目标根目录

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::TemplateSource;
use crate::error::InitError;
use crate::utils::{ensure_dir, write_json};

pub const PACKAGE_JSON: &str = "package.json";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "ts";

/// 源码文件落盘的子目录
pub const SOURCE_DIR: &str = "src";

/// 单个模板文件的去向
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// 改写 name 后写入根目录
    PackageJson,
    /// 复制到 `src/`
    Source,
    /// 原样复制到根目录
    Verbatim,
}

impl Placement {
    pub fn of(name: &str) -> Self {
        if name == PACKAGE_JSON {
            Placement::PackageJson
        } else if Path::new(name).extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            Placement::Source
        } else {
            Placement::Verbatim
        }
    }

    /// 在 `root` 下的目标路径
    pub fn target(&self, root: &Path, name: &str) -> PathBuf {
        match self {
            Placement::Source => root.join(SOURCE_DIR).join(name),
            Placement::PackageJson | Placement::Verbatim => root.join(name),
        }
    }
}

/// 替换 package.json 的 `name` 字段，其余字段与顺序保持不变
pub fn rename_package(manifest: &[u8], package_name: &str) -> Result<Value> {
    let mut pkg: Map<String, Value> =
        serde_json::from_slice(manifest).map_err(|e| InitError::InvalidPackageJson {
            reason: e.to_string(),
        })?;

    pkg.insert("name".to_string(), Value::String(package_name.to_string()));
    Ok(Value::Object(pkg))
}

/// 把模板写入 `root`，返回写出的文件路径
pub fn materialize(source: &TemplateSource, root: &Path, package_name: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for name in source.entries()? {
        let placement = Placement::of(&name);
        let target = placement.target(root, &name);

        match placement {
            Placement::PackageJson => {
                let manifest = source.read(&name)?;
                let pkg = rename_package(&manifest, package_name)
                    .with_context(|| format!("Failed to rewrite template {}", name))?;
                write_json(&target, &pkg)?;
            }
            Placement::Source => {
                ensure_dir(&root.join(SOURCE_DIR))?;
                source.copy_to(&name, &target)?;
            }
            Placement::Verbatim => source.copy_to(&name, &target)?,
        }

        written.push(target);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_placement_of() {
        assert_eq!(Placement::of("package.json"), Placement::PackageJson);
        assert_eq!(Placement::of("hello.ts"), Placement::Source);
        assert_eq!(Placement::of("types.d.ts"), Placement::Source);
        assert_eq!(Placement::of("tsconfig.json"), Placement::Verbatim);
        assert_eq!(Placement::of("README.md"), Placement::Verbatim);
        assert_eq!(Placement::of("ts"), Placement::Verbatim);
        assert_eq!(Placement::of(".ts"), Placement::Verbatim);
        assert_eq!(Placement::of("app.tsx"), Placement::Verbatim);
    }

    #[test]
    fn test_rename_package_keeps_other_fields() {
        let manifest = br#"{"name":"old","version":"1.2.3","scripts":{"dev":"x"},"private":true}"#;
        let pkg = rename_package(manifest, "@scope/new").unwrap();

        assert_eq!(pkg["name"], "@scope/new");
        assert_eq!(pkg["version"], "1.2.3");
        assert_eq!(pkg["scripts"]["dev"], "x");
        assert_eq!(pkg["private"], true);

        let keys: Vec<&String> = pkg.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name", "version", "scripts", "private"]);
    }

    #[test]
    fn test_rename_package_adds_missing_name() {
        let pkg = rename_package(br#"{"version":"0.0.0"}"#, "demo").unwrap();
        assert_eq!(pkg["name"], "demo");
    }

    #[test]
    fn test_rename_package_rejects_non_object() {
        let err = rename_package(b"[1, 2]", "demo").unwrap_err();
        assert!(err.to_string().contains("package.json is invalid"));
    }

    #[test]
    fn test_materialize_directory_template() {
        let template = TempDir::new().unwrap();
        fs::write(
            template.path().join("package.json"),
            r#"{"name":"tpl","version":"0.0.0"}"#,
        )
        .unwrap();
        fs::write(template.path().join("hello.ts"), "export default {}\n").unwrap();
        fs::write(template.path().join("README.md"), "# readme\n").unwrap();

        let out = TempDir::new().unwrap();
        let source = TemplateSource::Directory(template.path().to_path_buf());
        let written = materialize(&source, out.path(), "demo-app").unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(out.path().join("package.json")).unwrap(),
            "{\n  \"name\": \"demo-app\",\n  \"version\": \"0.0.0\"\n}\n"
        );
        assert_eq!(
            fs::read_to_string(out.path().join("src/hello.ts")).unwrap(),
            "export default {}\n"
        );
        assert!(!out.path().join("hello.ts").exists());
        assert_eq!(
            fs::read_to_string(out.path().join("README.md")).unwrap(),
            "# readme\n"
        );
    }

    #[test]
    fn test_materialize_embedded_template() {
        let out = TempDir::new().unwrap();
        materialize(&TemplateSource::Embedded, out.path(), "@acme/edge").unwrap();

        let pkg: Value =
            serde_json::from_str(&fs::read_to_string(out.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(pkg["name"], "@acme/edge");
        assert!(out.path().join("src/hello.ts").is_file());
        assert!(out.path().join("tsconfig.json").is_file());
    }
}
