use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{provider}: area '{name}' not found")]
    AreaNotFound { provider: String, name: String },

    #[error("{provider}: no catalogue category matches '{title}'")]
    CategoryNotFound { provider: String, title: String },

    #[error("{provider}: unexpected response: {message}")]
    UnexpectedResponse { provider: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Lookup,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SalaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SalaryError::ApiError(_) => ErrorCategory::Network,
            SalaryError::ConfigError { .. }
            | SalaryError::MissingConfigError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::UrlError(_) => ErrorCategory::Configuration,
            SalaryError::AreaNotFound { .. } | SalaryError::CategoryNotFound { .. } => {
                ErrorCategory::Lookup
            }
            SalaryError::SerializationError(_) | SalaryError::UnexpectedResponse { .. } => {
                ErrorCategory::Data
            }
            SalaryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Lookup | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SalaryError::ApiError(e) if e.status().map(|s| s.as_u16()) == Some(403) => {
                "檢查 API 金鑰 (SJ_SECRET_KEY) 或 User-Agent 設定"
            }
            SalaryError::ApiError(_) => "檢查網路連線後重新執行",
            SalaryError::MissingConfigError { .. } => "在設定檔或 .env 中補上缺少的設定值",
            SalaryError::ConfigError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::UrlError(_) => "修正設定檔中的錯誤欄位",
            SalaryError::AreaNotFound { .. } => "確認 search.area 的地區名稱拼寫",
            SalaryError::CategoryNotFound { .. } => "確認 superjob.catalogue_title 與目錄標題相符",
            SalaryError::SerializationError(_) | SalaryError::UnexpectedResponse { .. } => {
                "API 回應格式可能已變更，請檢查 base_url 設定"
            }
            SalaryError::IoError(_) => "檢查檔案路徑與權限",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("無法取得職缺資料: {}", self),
            ErrorCategory::Configuration => format!("設定錯誤: {}", self),
            ErrorCategory::Lookup => format!("查詢失敗: {}", self),
            ErrorCategory::Data => format!("資料格式錯誤: {}", self),
            ErrorCategory::System => format!("系統錯誤: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_high_severity() {
        let err = SalaryError::CategoryNotFound {
            provider: "SuperJob".to_string(),
            title: "Разработка".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("Разработка"));
    }

    #[test]
    fn test_missing_config_message() {
        let err = SalaryError::MissingConfigError {
            field: "superjob.secret_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("superjob.secret_key"));
    }
}
