pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ReportSettings;
#[cfg(feature = "cli")]
use crate::domain::model::{BusinessInputs, ExportFormat, GenerationMode};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// 命令列即是表單：每個欄位對應一個參數
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "business-model-generator")]
#[command(about = "Generate a business model presentation with optional loan and grant letters")]
pub struct CliConfig {
    #[arg(long, default_value = "")]
    pub business_goal: String,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub desired_income: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub investment_amount: f64,

    #[arg(long)]
    pub grant_requested: bool,

    #[arg(long)]
    pub loan_requested: bool,

    /// Timeframe in months (0-12)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i32).range(0..=12))]
    pub time_frame: i32,

    /// faithful (form values other than funding flags ignored) or input-driven
    #[arg(long, default_value = "faithful")]
    pub mode: GenerationMode,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats to write (txt, json, csv)
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<ExportFormat>,

    /// Do not print the presentation to stdout
    #[arg(long)]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ReportSettings for CliConfig {
    fn inputs(&self) -> BusinessInputs {
        BusinessInputs {
            business_goal: self.business_goal.clone(),
            desired_income: self.desired_income,
            investment_amount: self.investment_amount,
            grant_requested: self.grant_requested,
            loan_requested: self.loan_requested,
            time_frame: self.time_frame,
        }
    }

    fn mode(&self) -> GenerationMode {
        self.mode
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn export_formats(&self) -> Vec<ExportFormat> {
        let mut formats = Vec::new();
        for format in &self.formats {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }

    fn print_presentation(&self) -> bool {
        !self.quiet
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.formats.is_empty() {
            validate_path("output_path", &self.output_path)?;
        }
        Ok(())
    }
}
