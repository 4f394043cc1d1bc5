use clap::Parser;
use fitness_catalog::utils::{logger, validation::Validate};
use fitness_catalog::{app, server, CatalogError, CliConfig, LocalStorage, ServiceConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置 (日誌尚未初始化，直接輸出到 stderr)
    let config = match ServiceConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting fitness-catalog");
    if config.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Service failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn run(config: ServiceConfig) -> Result<(), CatalogError> {
    // 驗證配置
    config.validate()?;
    let addr = app::listen_addr(&config)?;

    let storage = LocalStorage::new(config.base_dir.clone());
    let router = app::build_router(&config, &storage).await?;

    let listener = TcpListener::bind(addr).await?;
    server::serve(listener, router, server::shutdown_signal()).await
}
