use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Export error: {message}")]
    ExportError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Export,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::IoError(_) => ErrorCategory::Io,
            ReportError::SerializationError(_)
            | ReportError::CsvError(_)
            | ReportError::ExportError { .. } => ErrorCategory::Export,
            ReportError::TomlError(_)
            | ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫檔失敗可能只是暫時性的（權限、磁碟空間）
            ReportError::IoError(_) => ErrorSeverity::Medium,
            ReportError::SerializationError(_)
            | ReportError::CsvError(_)
            | ReportError::ExportError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("Could not read or write a file: {}", e),
            ReportError::SerializationError(_) | ReportError::CsvError(_) => {
                "The report could not be exported".to_string()
            }
            ReportError::ExportError { message } => {
                format!("The report could not be exported: {}", message)
            }
            ReportError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ReportError::ConfigError { message } => format!("Configuration problem: {}", message),
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ReportError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Export => "Re-run with --verbose and report the failing export format",
            ErrorCategory::Configuration => {
                "Fix the configuration value and run again; see --help for accepted values"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
