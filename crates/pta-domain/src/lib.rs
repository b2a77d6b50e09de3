//! # Paper Topic Atlas - Domain Layer
//!
//! Core types and contracts for unsupervised topical clustering of short
//! scientific-text records. This crate is dependency-light by design:
//! entities, value objects, the domain error type, pipeline constants, and
//! the embedding provider port. Algorithms live in `pta-application`;
//! provider implementations in `pta-providers`.
//!
//! ## Invariants
//!
//! Every pipeline stage preserves batch length and positional order:
//! record `i` owns composite `i`, embedding `i`, label `i`, and point `i`.
//! The reserved noise label (`-1`) never appears as a browsable group.

/// Domain constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

// Re-export the most used types at the crate root for convenience
pub use entities::Paper;
pub use error::{Error, Result};
pub use value_objects::{
    ClusterMap, Embedding, FieldSelection, PipelineOptions, ScatterPoint, TopicGroup,
};
