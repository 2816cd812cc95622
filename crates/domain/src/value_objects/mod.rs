//! Value objects - validated by construction, immutable afterwards.

mod greeting;
mod greeting_catalog;

pub use greeting::Greeting;
pub use greeting_catalog::{GreetingCatalog, DEFAULT_GREETINGS, MAX_CATALOG_SIZE};
