use anyhow::{Context, Result};
use gemini_chat::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives win over the configured level.
fn log_filter(rust_log: Option<String>, configured: &str) -> Result<(String, EnvFilter)> {
    let directives = rust_log.unwrap_or_else(|| configured.to_string());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: '{}'", directives))?;
    Ok((directives, filter))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Refuse to start without a usable configuration and API key
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let (directives, filter) = match log_filter(rust_log, &config.server.logs.level) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Gemini chat server starting (model {}, log filter {})",
        config.llm.model, directives
    );

    server::run(config).await?;

    Ok(())
}
