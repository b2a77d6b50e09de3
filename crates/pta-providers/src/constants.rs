//! Provider layer constants

/// Dimensionality of null-provider test vectors
///
/// Matches the common sentence-embedding models so downstream shapes are
/// realistic in tests.
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Dimensionality of the default FastEmbed model (AllMiniLML6V2)
pub const EMBEDDING_DIMENSION_FASTEMBED_DEFAULT: usize = 384;
