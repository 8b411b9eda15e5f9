//! package.json `name` 字段校验

use lazy_static::lazy_static;
use regex::Regex;

/// 校验失败时展示的提示
pub const INVALID_PACKAGE_NAME: &str = "Invalid package.json name";

lazy_static! {
    // 可选 `@scope/`，随后是名字本体；连字符转义后与 npm 的语法等价
    static ref PACKAGE_NAME: Regex =
        Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$").unwrap();
}

/// 判断是否为合法的包名
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// 提示用的校验函数
pub fn validate_package_name(name: &str) -> Result<(), &'static str> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(INVALID_PACKAGE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_scoped_names() {
        for name in [
            "my-app",
            "demo-app",
            "njs",
            "a",
            "0day",
            "~tilde",
            "-dash",
            "name.with.dots",
            "under_score",
            "@scope/name",
            "@my-org/my.pkg",
            "@*/star",
            "@s.c_o~pe/x",
        ] {
            assert!(is_valid_package_name(name), "should accept {name:?}");
        }
    }

    #[test]
    fn test_rejects_invalid_names() {
        for name in [
            "",
            "My_App",
            "UPPER",
            "_leading",
            ".leading",
            "@/x",
            "@scope/",
            "@scope",
            "with space",
            "a/b",
            "@Scope/name",
            "star*",
            "emoji🚀",
            "trailing\n",
        ] {
            assert!(!is_valid_package_name(name), "should reject {name:?}");
        }
    }

    #[test]
    fn test_validate_message() {
        assert_eq!(validate_package_name("My_App"), Err(INVALID_PACKAGE_NAME));
        assert!(validate_package_name("@scope/name").is_ok());
    }
}
