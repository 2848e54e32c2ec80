use business_model_generator::core::export::{
    JSON_FILE, PRESENTATION_FILE, PROJECTIONS_CSV_FILE, REVENUE_CSV_FILE,
};
use business_model_generator::core::ReportSettings;
use business_model_generator::domain::model::ExportFormat;
use business_model_generator::utils::{logger, validation::Validate};
use business_model_generator::{
    FormPipeline, GenerationMode, LocalStorage, ReportEngine, TomlConfig,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Generate a business model presentation from a TOML form file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "business-model.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override generation mode from config
    #[arg(long)]
    mode: Option<GenerationMode>,

    /// Dry run - show what would be generated without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置（日誌設定也在其中，因此先載入再初始化日誌）
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let level = logger::resolve_level(args.verbose, config.log_level());
    if config.json_logging() {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::info!("Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(mode) = args.mode {
        config.set_mode(mode);
        tracing::info!("Generation mode overridden to: {}", mode);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        report = config.report_name(),
        mode = %config.mode(),
        output = config.output_path(),
        "Configuration loaded and validated"
    );

    if args.dry_run {
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
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

fn perform_dry_run(config: &TomlConfig) {
    let inputs = config.inputs();

    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📝 Form:");
    println!("  Business Goal: {}", inputs.business_goal);
    println!("  Desired Income: {:.2}", inputs.desired_income);
    println!("  Investment Amount: {:.2}", inputs.investment_amount);
    println!("  Grant Requested: {}", inputs.grant_requested);
    println!("  Loan Requested: {}", inputs.loan_requested);
    println!("  Timeframe (Months): {}", inputs.time_frame);

    println!();
    println!("⚙️ Generation Mode: {}", config.mode());
    if config.mode() == GenerationMode::Faithful {
        println!("  Only the funding flags affect the generated model");
    }

    println!();
    println!("💾 Output:");
    println!("  Print presentation: {}", config.print_presentation());
    let formats = config.export_formats();
    if formats.is_empty() {
        println!("  No export files");
    } else {
        println!("  Path: {}", config.output_path());
        for format in formats {
            let files: &[&str] = match format {
                ExportFormat::Txt => &[PRESENTATION_FILE],
                ExportFormat::Json => &[JSON_FILE],
                ExportFormat::Csv => &[PROJECTIONS_CSV_FILE, REVENUE_CSV_FILE],
            };
            for file in files {
                println!("  - {}", file);
            }
        }
    }

    println!();
    println!("✅ Dry run analysis complete.");
}
