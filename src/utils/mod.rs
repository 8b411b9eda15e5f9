//! 工具模块
//!
//! 提供文件系统、JSON、路径等常用工具函数

pub mod fs;
pub mod json;
pub mod path;

// 重导出
pub use fs::*;
pub use json::*;
