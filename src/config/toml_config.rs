use crate::core::ReportSettings;
use crate::domain::model::{BusinessInputs, ExportFormat, GenerationMode};
use crate::utils::error::{ReportError, Result};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{
    validate_export_formats, validate_path, validate_required_field, validate_time_frame, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
    pub form: Option<BusinessInputs>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
    pub print: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// "compact" (default) or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${BUSINESS_GOAL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let form = validate_required_field("form", &self.form)?;

        // 表單的步進器只允許 0-12 個月
        validate_time_frame("form.time_frame", form.time_frame)?;

        if let Some(mode) = self.report.as_ref().and_then(|r| r.mode.as_deref()) {
            mode.parse::<GenerationMode>()
                .map_err(|reason| ReportError::InvalidConfigValueError {
                    field: "report.mode".to_string(),
                    value: mode.to_string(),
                    reason,
                })?;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validate_path("output.path", path)?;
            }
            if let Some(formats) = &output.formats {
                validate_export_formats("output.formats", formats)?;
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            if !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str()) {
                return Err(ReportError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Expected one of: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if format != "compact" && format != "json" {
                return Err(ReportError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: "Expected 'compact' or 'json'".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn report_name(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or("business-model")
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    /// 以命令列參數覆蓋生成模式
    pub fn set_mode(&mut self, mode: GenerationMode) {
        let report = self.report.get_or_insert(ReportConfig {
            name: None,
            mode: None,
        });
        report.mode = Some(mode.to_string());
    }
}

impl ReportSettings for TomlConfig {
    fn inputs(&self) -> BusinessInputs {
        self.form.clone().unwrap_or_default()
    }

    fn mode(&self) -> GenerationMode {
        self.report
            .as_ref()
            .and_then(|r| r.mode.as_deref())
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn export_formats(&self) -> Vec<ExportFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.formats.as_ref())
            .and_then(|f| validate_export_formats("output.formats", f).ok())
            .unwrap_or_default()
    }

    fn print_presentation(&self) -> bool {
        self.output.as_ref().and_then(|o| o.print).unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
