//! Use cases - capabilities exposed to callers.

pub mod greeting;

// Re-export main types
pub use greeting::{GreetingProvider, SimpleGreetingService};
