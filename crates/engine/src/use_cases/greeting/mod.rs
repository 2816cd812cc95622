//! Greeting use cases.
//!
//! `GreetingProvider` is the capability callers depend on: produce one line of
//! display text. `SimpleGreetingService` is the catalog-backed variant.

mod simple;

pub use simple::SimpleGreetingService;

/// Produces greeting text on demand.
#[cfg_attr(test, mockall::automock)]
pub trait GreetingProvider: Send + Sync {
    /// Return a greeting.
    fn greeting(&self) -> String;
}
