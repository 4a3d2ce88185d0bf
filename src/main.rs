use box_cac::app::server::{build_state, run_server};
use box_cac::utils::{logger, validation::Validate};
use box_cac::ServerConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時沿用現有環境變數
    let _ = dotenvy::dotenv();

    // 缺少 OPENAI_API_KEY 時 clap 會直接結束程序
    let config = ServerConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting box-cac server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match config.load_model_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load model settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Model settings validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "🤖 Model {} (temperature {}, seed {}, {} samples)",
        settings.name,
        settings.temperature,
        settings.seed,
        settings.samples
    );

    let state = build_state(&config, settings)?;
    run_server(&config, state).await?;

    Ok(())
}
