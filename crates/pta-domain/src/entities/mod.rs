//! Domain Entities
//!
//! Core business objects with identity. The only entity in this system is
//! the bibliographic record; everything else is a derived value object.

/// Bibliographic record entity
pub mod paper;

pub use paper::Paper;
