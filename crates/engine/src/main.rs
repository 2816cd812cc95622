//! GreetBldr Engine - Main entry point.

use std::path::Path;

use greetbldr_engine::infrastructure::config::{load_dotenv_files, EngineConfig};
use greetbldr_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv_failures = load_dotenv_files(&repo_root);

    // Initialize logging; stdout is reserved for greetings.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greetbldr_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for (path, error) in dotenv_failures {
        tracing::warn!(path = %path.display(), error = %error, "Failed to load dotenv file");
    }

    tracing::info!("Starting GreetBldr Engine");

    let config = EngineConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let app = App::from_config(&config)?;

    for _ in 0..config.count {
        println!("{}", app.greetings.greeting());
    }

    Ok(())
}
