//! GreetBldr Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - The `GreetingProvider` capability and its implementations
//! - `infrastructure/` - Random sources, catalog loading, configuration
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use use_cases::{GreetingProvider, SimpleGreetingService};
