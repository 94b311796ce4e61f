//! Subcommand handlers

use crate::classification_service::ClassificationService;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::http_server::{self, AppState};
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::impl_tracing::LoggerTracing;
use crate::report::render_report;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.model_path = model;
    }

    match cli.command {
        Commands::Classify { image } => classify(&config, image),
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
    }
}

fn classify(
    config: &Config,
    image: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let image_path = match image {
        Some(path) => path,
        None => prompt_image_path(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone()));
    let classification_service = ClassificationService::from_config(config, logger);

    let result = classification_service.classify_file(&image_path)?;

    print!("{}", render_report(&display_name(&image_path), &result));

    Ok(())
}

async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let logger = Arc::new(LoggerTracing::new());
    let classification_service = ClassificationService::from_config(&config, logger.clone());
    let state = AppState::new(classification_service, logger, config.max_request_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    http_server::serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

fn prompt_image_path(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    write!(output, "Enter image path: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let path = line.trim().trim_matches('"');
    if path.is_empty() {
        return Err("No image path given".into());
    }

    Ok(PathBuf::from(path))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
