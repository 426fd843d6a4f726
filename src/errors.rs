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
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolError {
            $($variant(String),)*
        }

        impl SchoolError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SchoolError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Template("E005", "Template Error"),
    Serialization("E006", "Serialization Error"),
    Validation("E007", "Validation Error"),
}

impl SchoolError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.format_simple())
    }
}

impl std::error::Error for SchoolError {}

impl From<sea_orm::DbErr> for SchoolError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolError {
    fn from(err: std::io::Error) -> Self {
        SchoolError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolError {
    fn from(err: serde_json::Error) -> Self {
        SchoolError::Serialization(err.to_string())
    }
}

impl From<askama::Error> for SchoolError {
    fn from(err: askama::Error) -> Self {
        SchoolError::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolError::database_config("test").code(), "E001");
        assert_eq!(SchoolError::database_operation("test").code(), "E003");
        assert_eq!(SchoolError::template("test").code(), "E005");
        assert_eq!(SchoolError::serialization("test").code(), "E006");
        assert_eq!(SchoolError::validation("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(SchoolError::template("test").error_type(), "Template Error");
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = SchoolError::template("students.html missing");
        let formatted = err.to_string();
        assert!(formatted.starts_with("[E005]"));
        assert!(formatted.contains("Template Error"));
        assert!(formatted.contains("students.html missing"));
    }

    #[test]
    fn test_from_template_error() {
        let err: SchoolError = askama::Error::Fmt.into();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SchoolError = io.into();
        assert_eq!(err.code(), "E004");
        assert_eq!(err.message(), "gone");
    }
}
