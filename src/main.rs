use anyhow::Context;
use cep_lookup::core::ConfigProvider;
use cep_lookup::utils::{logger, validation::Validate};
use cep_lookup::{router, CliConfig, LookupService, TomlConfig, ViaCepResolver};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

struct Settings {
    bind_addr: String,
    directory_url: String,
    json_logs: bool,
    log_level: Option<String>,
}

impl Settings {
    fn from_provider(config: &impl ConfigProvider, log_level: Option<String>) -> Self {
        Self {
            bind_addr: config.bind_addr().to_string(),
            directory_url: config.directory_url().to_string(),
            json_logs: config.json_logs(),
            log_level,
        }
    }
}

fn load_settings(cli: &CliConfig) -> cep_lookup::Result<Settings> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            let level = config.log_level().map(str::to_string);
            Ok(Settings::from_provider(&config, level))
        }
        None => {
            cli.validate()?;
            Ok(Settings::from_provider(cli, None))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let filter = logger::build_filter(cli.verbose, settings.log_level.as_deref());
    if settings.json_logs || cli.json_logs {
        logger::init_json_logger(filter);
    } else {
        logger::init_cli_logger(filter);
    }

    tracing::info!("Starting cep-lookup");
    tracing::debug!("Directory: {}", settings.directory_url);

    let service = Arc::new(LookupService::new(ViaCepResolver::new(
        settings.directory_url.as_str(),
    )));
    let app = router(service);

    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
