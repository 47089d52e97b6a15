//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_srms_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SrmsError {
            $($variant(String),)*
        }

        impl SrmsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SrmsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SrmsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SrmsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SrmsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SrmsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_srms_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl SrmsError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SrmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SrmsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SrmsError {
    fn from(err: sea_orm::DbErr) -> Self {
        SrmsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SrmsError {
    fn from(err: std::io::Error) -> Self {
        SrmsError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SrmsError {
    fn from(err: serde_json::Error) -> Self {
        SrmsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SrmsError {
    fn from(err: chrono::ParseError) -> Self {
        SrmsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SrmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SrmsError::database_config("test").code(), "E001");
        assert_eq!(SrmsError::validation("test").code(), "E004");
        assert_eq!(SrmsError::not_found("test").code(), "E005");
        assert_eq!(SrmsError::authorization("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SrmsError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            SrmsError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SrmsError::validation("成绩必须在0-100之间");
        assert_eq!(err.message(), "成绩必须在0-100之间");
    }

    #[test]
    fn test_format_simple() {
        let err = SrmsError::validation("Invalid score");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid score"));
    }
}
