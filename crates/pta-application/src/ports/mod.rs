//! Application Ports
//!
//! Registries for provider discovery and the service contracts exposed to
//! presentation layers.

/// Provider registries
pub mod registry;
/// Service interfaces
pub mod services;

pub use services::ClusterPipelineInterface;
