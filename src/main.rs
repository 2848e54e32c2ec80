use business_model_generator::utils::{logger, validation::Validate};
use business_model_generator::{CliConfig, FormPipeline, LocalStorage, ReportEngine};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(logger::resolve_level(config.verbose, "info"));

    tracing::info!("Starting business-model-generator");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 送出表單：建立存儲與管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = FormPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(written) => {
            for path in &written {
                tracing::info!("📁 Export saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "Report generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
