//! GreetBldr domain.
//!
//! Pure value objects for the greeting catalog. Nothing in this crate performs
//! I/O or draws random numbers; the engine injects both.

pub mod error;
pub mod value_objects;

pub use error::DomainError;

// Re-export value objects
pub use value_objects::{Greeting, GreetingCatalog, DEFAULT_GREETINGS};
