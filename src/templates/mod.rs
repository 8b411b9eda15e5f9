//! 嵌入资源管理
//!
//! 使用 rust-embed 将项目模板编译进二进制，并负责把模板写入目标目录

pub mod files;
pub mod materialize;

pub use files::{TemplateAssets, TemplateSource};
pub use materialize::{materialize, Placement};
