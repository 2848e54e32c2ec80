use crate::domain::model::{BusinessInputs, ExportFormat, GeneratedReport, GenerationMode};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the form values and output preferences come from (CLI flags or TOML).
pub trait ReportSettings: Send + Sync {
    fn inputs(&self) -> BusinessInputs;
    fn mode(&self) -> GenerationMode;
    fn output_path(&self) -> &str;
    fn export_formats(&self) -> Vec<ExportFormat>;
    fn print_presentation(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<BusinessInputs>;
    async fn transform(&self, inputs: BusinessInputs) -> Result<GeneratedReport>;
    async fn load(&self, report: GeneratedReport) -> Result<Vec<String>>;
}
