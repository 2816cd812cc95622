//! Application state and composition.

use std::sync::Arc;

use anyhow::Context;
use greetbldr_domain::GreetingCatalog;

use crate::infrastructure::{
    catalog_loader::load_catalog,
    config::EngineConfig,
    ports::RandomPort,
    random::{SeededRandom, SystemRandom},
};
use crate::use_cases::{GreetingProvider, SimpleGreetingService};

/// Main application state.
///
/// Holds the capabilities exposed to callers.
pub struct App {
    pub greetings: Arc<dyn GreetingProvider>,
}

impl App {
    pub fn new(catalog: GreetingCatalog, random: Arc<dyn RandomPort>) -> Self {
        Self {
            greetings: Arc::new(SimpleGreetingService::new(catalog, random)),
        }
    }

    /// Compose the application from configuration.
    ///
    /// Fails if a configured catalog file cannot be loaded.
    pub fn from_config(config: &EngineConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path).context("Failed to load configured catalog")?,
            None => GreetingCatalog::default(),
        };

        let random: Arc<dyn RandomPort> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };

        tracing::info!(entries = catalog.len(), "Greeting service ready");
        Ok(Self::new(catalog, random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use greetbldr_domain::DEFAULT_GREETINGS;

    use crate::use_cases::greeting::MockGreetingProvider;

    fn draw(app: &App, count: usize) -> Vec<String> {
        (0..count).map(|_| app.greetings.greeting()).collect()
    }

    #[test]
    fn default_config_uses_builtin_catalog() {
        let app = App::from_config(&EngineConfig::default()).expect("app");
        let greetings = draw(&app, 25);
        assert_eq!(greetings.len(), 25);
        assert!(greetings
            .iter()
            .all(|g| DEFAULT_GREETINGS.contains(&g.as_str())));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = EngineConfig {
            seed: Some(2024),
            ..EngineConfig::default()
        };
        let a = App::from_config(&config).expect("app");
        let b = App::from_config(&config).expect("app");
        assert_eq!(draw(&a, 30), draw(&b, 30));
    }

    #[test]
    fn configured_catalog_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"["Bonjour!"]"#).expect("write");

        let config = EngineConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..EngineConfig::default()
        };
        let app = App::from_config(&config).expect("app");
        assert_eq!(draw(&app, 3), vec!["Bonjour!"; 3]);
    }

    #[test]
    fn missing_catalog_file_fails_composition() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = EngineConfig {
            catalog_path: Some(dir.path().join("nope.json")),
            ..EngineConfig::default()
        };
        let err = App::from_config(&config).err().expect("composition should fail");
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[test]
    fn greetings_delegate_to_provider() {
        let mut provider = MockGreetingProvider::new();
        provider
            .expect_greeting()
            .times(2)
            .returning(|| "Hi there!".to_string());

        let app = App {
            greetings: Arc::new(provider),
        };
        assert_eq!(draw(&app, 2), vec!["Hi there!", "Hi there!"]);
    }
}
