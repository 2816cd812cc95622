//! Infrastructure - ports and the adapters that implement them.

pub mod catalog_loader;
pub mod config;
pub mod ports;
pub mod random;
