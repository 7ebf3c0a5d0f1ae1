use std::fmt;

#[derive(Debug, Clone)]
pub enum RedirectorError {
    BackendTransport(String),
    BackendResponse(String),
    BackendConfig(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Template(String),
}

impl RedirectorError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            RedirectorError::BackendTransport(_) => "E001",
            RedirectorError::BackendResponse(_) => "E002",
            RedirectorError::BackendConfig(_) => "E003",
            RedirectorError::Config(_) => "E004",
            RedirectorError::FileOperation(_) => "E005",
            RedirectorError::Serialization(_) => "E006",
            RedirectorError::Template(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            RedirectorError::BackendTransport(_) => "Backend Transport Error",
            RedirectorError::BackendResponse(_) => "Backend Response Error",
            RedirectorError::BackendConfig(_) => "Backend Configuration Error",
            RedirectorError::Config(_) => "Configuration Error",
            RedirectorError::FileOperation(_) => "File Operation Error",
            RedirectorError::Serialization(_) => "Serialization Error",
            RedirectorError::Template(_) => "Template Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            RedirectorError::BackendTransport(msg) => msg,
            RedirectorError::BackendResponse(msg) => msg,
            RedirectorError::BackendConfig(msg) => msg,
            RedirectorError::Config(msg) => msg,
            RedirectorError::FileOperation(msg) => msg,
            RedirectorError::Serialization(msg) => msg,
            RedirectorError::Template(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RedirectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RedirectorError {}

// 便捷的构造函数
impl RedirectorError {
    pub fn backend_transport<T: Into<String>>(msg: T) -> Self {
        RedirectorError::BackendTransport(msg.into())
    }

    pub fn backend_response<T: Into<String>>(msg: T) -> Self {
        RedirectorError::BackendResponse(msg.into())
    }

    pub fn backend_config<T: Into<String>>(msg: T) -> Self {
        RedirectorError::BackendConfig(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        RedirectorError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        RedirectorError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        RedirectorError::Serialization(msg.into())
    }

    pub fn template<T: Into<String>>(msg: T) -> Self {
        RedirectorError::Template(msg.into())
    }
}

impl From<ureq::Error> for RedirectorError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => {
                RedirectorError::BackendResponse(format!("backend answered HTTP {}", status))
            }
            other => RedirectorError::BackendTransport(other.to_string()),
        }
    }
}

impl From<std::io::Error> for RedirectorError {
    fn from(err: std::io::Error) -> Self {
        RedirectorError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RedirectorError {
    fn from(err: serde_json::Error) -> Self {
        RedirectorError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for RedirectorError {
    fn from(err: toml::ser::Error) -> Self {
        RedirectorError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for RedirectorError {
    fn from(err: config::ConfigError) -> Self {
        RedirectorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedirectorError>;
