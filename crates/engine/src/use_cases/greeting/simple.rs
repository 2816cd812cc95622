//! Catalog-backed greeting provider.

use std::sync::Arc;

use greetbldr_domain::GreetingCatalog;

use super::GreetingProvider;
use crate::infrastructure::ports::RandomPort;

/// Returns a uniformly random entry from a fixed catalog.
///
/// The service owns its catalog; the only state that changes across calls is
/// the random source.
pub struct SimpleGreetingService {
    catalog: GreetingCatalog,
    random: Arc<dyn RandomPort>,
}

impl SimpleGreetingService {
    pub fn new(catalog: GreetingCatalog, random: Arc<dyn RandomPort>) -> Self {
        Self { catalog, random }
    }

    /// Service over the five built-in greetings.
    pub fn with_default_catalog(random: Arc<dyn RandomPort>) -> Self {
        Self::new(GreetingCatalog::default(), random)
    }

    pub fn catalog(&self) -> &GreetingCatalog {
        &self.catalog
    }
}

impl GreetingProvider for SimpleGreetingService {
    fn greeting(&self) -> String {
        let index = self.random.gen_index(self.catalog.len());
        let greeting = self.catalog.pick(index);
        tracing::trace!(index, greeting = %greeting, "Selected greeting");
        greeting.as_str().to_string()
    }
}
