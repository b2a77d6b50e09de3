//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers, following
//! the Dependency Inversion Principle: the domain defines interfaces,
//! providers and infrastructure implement them.

/// External service provider ports
pub mod providers;

pub use providers::EmbeddingProvider;
