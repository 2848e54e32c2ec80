use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs one form submission through a [`Pipeline`].
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting report generation");

        // Extract
        let inputs = self.pipeline.extract().await?;
        tracing::debug!(
            loan = inputs.loan_requested,
            grant = inputs.grant_requested,
            "Form submitted"
        );

        // Transform
        let report = self.pipeline.transform(inputs).await?;
        tracing::debug!(
            "Rendered presentation ({} bytes) and {} artifacts",
            report.presentation.len(),
            report.artifacts.len()
        );

        // Load
        let written = self.pipeline.load(report).await?;
        tracing::info!("Report generation finished, {} files written", written.len());

        Ok(written)
    }
}
