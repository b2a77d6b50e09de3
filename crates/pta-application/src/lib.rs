//! # Paper Topic Atlas - Application Layer
//!
//! The clustering engine: embedding-matrix standardization, adaptive
//! density-based cluster selection with a deterministic hierarchical
//! fallback, native 2-D t-SNE projection, and result assembly, plus the
//! linkme registry through which embedding providers are discovered and
//! the pipeline service tying the stages together.
//!
//! Layering follows the workspace convention: this crate depends only on
//! `pta-domain`; provider implementations register themselves into
//! [`ports::registry`] from `pta-providers`.

/// Pipeline domain services
pub mod domain_services;
/// Registries and service contracts
pub mod ports;
/// Use case implementations
pub mod use_cases;

pub use ports::ClusterPipelineInterface;
pub use use_cases::ClusterPipeline;
