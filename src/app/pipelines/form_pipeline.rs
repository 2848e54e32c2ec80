use crate::core::export::render_artifacts;
use crate::core::generator::generate_business_model;
use crate::core::presentation::{print_business_model_and_applications, render_presentation};
use crate::core::{BusinessInputs, GeneratedReport, Pipeline, ReportSettings, Storage};
use crate::domain::model::ReportBundle;
use crate::utils::error::Result;
use chrono::Utc;

/// Reads the form from settings, generates the model, prints it and stores exports.
pub struct FormPipeline<S: Storage, C: ReportSettings> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ReportSettings> FormPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ReportSettings> Pipeline for FormPipeline<S, C> {
    async fn extract(&self) -> Result<BusinessInputs> {
        let inputs = self.config.inputs();
        tracing::debug!(
            goal = %inputs.business_goal,
            desired_income = inputs.desired_income,
            investment_amount = inputs.investment_amount,
            time_frame = inputs.time_frame,
            "Read form inputs"
        );
        Ok(inputs)
    }

    async fn transform(&self, inputs: BusinessInputs) -> Result<GeneratedReport> {
        let mode = self.config.mode();
        tracing::info!("Generating business model ({} mode)", mode);

        let model = generate_business_model(&inputs, mode);
        let presentation = render_presentation(&model);

        let formats = self.config.export_formats();
        let artifacts = if formats.is_empty() {
            Vec::new()
        } else {
            let bundle = ReportBundle {
                generated_at: Utc::now(),
                mode,
                inputs,
                model: model.clone(),
            };
            render_artifacts(&bundle, &presentation, &formats)?
        };

        Ok(GeneratedReport {
            model,
            presentation,
            artifacts,
        })
    }

    async fn load(&self, report: GeneratedReport) -> Result<Vec<String>> {
        if self.config.print_presentation() {
            print_business_model_and_applications(&report.model)?;
        }

        let mut written = Vec::with_capacity(report.artifacts.len());
        for (name, data) in &report.artifacts {
            tracing::debug!("Writing {} ({} bytes) to storage", name, data.len());
            self.storage.write_file(name, data).await?;
            written.push(format!("{}/{}", self.config.output_path(), name));
        }

        Ok(written)
    }
}
