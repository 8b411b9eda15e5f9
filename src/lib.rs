// create-njs - Library Root
//
// 交互式脚手架：询问项目信息，把内嵌模板写入目标目录

pub mod error;
pub mod project;
pub mod prompt;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use error::InitError;
pub use project::{init_project, InitOptions};
pub use prompt::{stdio_prompter, Prompter};
pub use templates::TemplateSource;
