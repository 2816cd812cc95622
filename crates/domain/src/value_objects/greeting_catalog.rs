//! Greeting catalog value object
//!
//! An ordered, immutable list of greetings. The catalog is the only source of
//! text a greeting provider may return, so its invariants are checked once at
//! construction:
//! - At least one entry (index selection by length must never see zero)
//! - No more than `MAX_CATALOG_SIZE` entries
//! - Every entry is a valid `Greeting`
//!
//! There is no `&mut self` API; once built a catalog never changes.

use serde::{Deserialize, Serialize};

use super::greeting::Greeting;
use crate::error::DomainError;

/// Upper bound on catalog entries
pub const MAX_CATALOG_SIZE: usize = 10_000;

/// Built-in greetings, in catalog order.
pub const DEFAULT_GREETINGS: [&str; 5] = [
    "Hello world!",
    "Welcome to Spring Boot!",
    "Hi there!",
    "Greetings from the SimpleGreetingService!",
    "Have a great day!",
];

/// Non-empty, ordered collection of greetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GreetingCatalog {
    entries: Vec<Greeting>,
}

impl GreetingCatalog {
    /// Build a catalog from already validated greetings.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if `entries` is empty
    /// - `DomainError::Constraint` if `entries` exceeds `MAX_CATALOG_SIZE`
    pub fn new(entries: Vec<Greeting>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::validation("Greeting catalog cannot be empty"));
        }
        if entries.len() > MAX_CATALOG_SIZE {
            return Err(DomainError::constraint(format!(
                "Greeting catalog cannot hold more than {} entries (got {})",
                MAX_CATALOG_SIZE,
                entries.len()
            )));
        }
        Ok(Self { entries })
    }

    /// Build a catalog from raw strings, validating each entry.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = texts
            .into_iter()
            .map(Greeting::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Greeting> {
        self.entries.get(index)
    }

    /// Entry at `index` wrapped modulo the catalog length.
    pub fn pick(&self, index: usize) -> &Greeting {
        &self.entries[index % self.entries.len()]
    }

    /// Whether `text` is one of the catalog entries.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|g| g.as_str() == text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Greeting> {
        self.entries.iter()
    }
}

impl Default for GreetingCatalog {
    /// The five built-in greetings.
    fn default() -> Self {
        Self {
            entries: DEFAULT_GREETINGS
                .into_iter()
                .map(Greeting::from_static)
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for GreetingCatalog {
    type Error = DomainError;

    fn try_from(texts: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_texts(texts)
    }
}

impl From<GreetingCatalog> for Vec<String> {
    fn from(catalog: GreetingCatalog) -> Self {
        catalog.entries.into_iter().map(String::from).collect()
    }
}
