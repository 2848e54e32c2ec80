pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use app::pipelines::form_pipeline::FormPipeline;
pub use crate::core::{
    engine::ReportEngine,
    generator::{
        generate_business_model, generate_detailed_business_model,
        generate_input_driven_business_model,
    },
    letters::{generate_grant_application, generate_loan_application},
    presentation::{print_business_model_and_applications, render_presentation},
};
pub use domain::model::{BusinessInputs, BusinessModel, GenerationMode};
pub use utils::error::{ReportError, Result};
