use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 表單輸入：使用者在送出時填寫的商業參數
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessInputs {
    pub business_goal: String,
    pub desired_income: f64,
    pub investment_amount: f64,
    pub grant_requested: bool,
    pub loan_requested: bool,
    pub time_frame: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    pub year: i32,
    pub revenue: f64,
    pub expenses: f64,
}

impl FinancialProjection {
    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Months from launch.
    pub time_frame: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessModel {
    pub value_propositions: Vec<String>,
    pub customer_segments: Vec<String>,
    pub channels: Vec<String>,
    pub revenue_streams: Vec<String>,
    pub key_activities: Vec<String>,
    pub key_resources: Vec<String>,
    pub key_partners: Vec<String>,
    pub cost_structure: Vec<String>,
    pub customer_relationships: Vec<String>,
    pub revenue_streams_detailed: Vec<RevenueLine>,
    pub loan_requested: bool,
    pub grant_requested: bool,
    pub target_market_size: u64,
    pub market_growth_rate: f64,
    pub competitive_landscape: Vec<String>,
    pub competitive_advantage: Vec<String>,
    pub marketing_strategy: Vec<String>,
    pub sales_strategy: Vec<String>,
    pub team: Vec<String>,
    pub legal_structure: String,
    pub regulatory_compliance: Vec<String>,
    pub financial_projections: Vec<FinancialProjection>,
    pub risk_assessment: Vec<String>,
    pub exit_strategy: String,
    pub milestones: Vec<Milestone>,
    pub social_impact: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Only the funding flags are taken from the form.
    #[default]
    Faithful,
    InputDriven,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Faithful => "faithful",
            GenerationMode::InputDriven => "input-driven",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(GenerationMode::Faithful),
            "input-driven" | "input_driven" => Ok(GenerationMode::InputDriven),
            other => Err(format!(
                "unknown generation mode '{}', expected 'faithful' or 'input-driven'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Txt,
    Json,
    Csv,
}

impl ExportFormat {
    pub const ALL: [&'static str; 3] = ["txt", "json", "csv"];
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!(
                "unsupported format '{}'. Valid formats: {}",
                other,
                ExportFormat::ALL.join(", ")
            )),
        }
    }
}

/// 匯出用的封裝：輸入、模式與產生結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    pub generated_at: DateTime<Utc>,
    pub mode: GenerationMode,
    pub inputs: BusinessInputs,
    pub model: BusinessModel,
}

/// A generated report together with its rendered artifacts.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub model: BusinessModel,
    pub presentation: String,
    /// (file name, contents) pairs ready to be stored.
    pub artifacts: Vec<(String, Vec<u8>)>,
}
