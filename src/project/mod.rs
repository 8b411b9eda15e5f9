//! 项目管理模块
//!
//! 提示会话、目标目录准备和初始化流程

pub mod destination;
pub mod initializer;
pub mod package_name;
pub mod report;
pub mod session;

// 重导出
pub use initializer::*;
pub use package_name::{is_valid_package_name, validate_package_name};
pub use session::{Answers, Session, Step, DEFAULT_PROJECT_NAME};
