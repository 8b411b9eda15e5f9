//! 错误类型
//!
//! 会话级的失败（取消、拒绝覆盖）和模板错误都在这里定义，
//! 其余文件系统错误通过 anyhow 携带路径上下文向上传递。

use std::io;
use thiserror::Error;

use crate::prompt::PromptError;

/// 初始化流程中可能出现的错误
#[derive(Debug, Error)]
pub enum InitError {
    /// 用户在任意一个提示中中断
    #[error("✖ Operation cancelled")]
    Cancelled,

    /// 目标目录非空且用户拒绝清空
    #[error("🚨 Oops, {target} already exists. Please try again with a different directory.")]
    OverwriteDeclined { target: String },

    /// 终端读写失败
    #[error("Failed to read answer from terminal: {0}")]
    Prompt(#[source] io::Error),

    /// 内嵌模板缺失文件
    #[error("Template '{name}' not found")]
    Template { name: String },

    /// 模板中的 package.json 不是 JSON 对象
    #[error("Template package.json is invalid: {reason}")]
    InvalidPackageJson { reason: String },
}

impl From<PromptError> for InitError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => InitError::Cancelled,
            PromptError::Io(e) => InitError::Prompt(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_declined_message_names_target() {
        let err = InitError::OverwriteDeclined {
            target: "Target directory \"my-app\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("my-app"));
        assert!(msg.contains("already exists"));
    }

    #[test]
    fn test_prompt_error_conversion() {
        let err: InitError = PromptError::Cancelled.into();
        assert!(matches!(err, InitError::Cancelled));
        assert_eq!(err.to_string(), "✖ Operation cancelled");

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: InitError = PromptError::Io(io_err).into();
        assert!(matches!(err, InitError::Prompt(_)));
    }
}
