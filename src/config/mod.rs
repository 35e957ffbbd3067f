//! Configuration module for a site instance
//!
//! This module provides the `SiteConfig` struct and its type-safe builder.
//! A config is the whole variation surface between OceanWP site variants.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{SiteConfigBuilder, WithBaseUrl};
pub use types::{ClassifierPolicy, ExtractionSelectors, FilterStyle, SiteConfig};
