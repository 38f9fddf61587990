//! Dashboard analytics
//!
//! Pure, synchronous helpers behind the read-only screens: mood
//! classification and trends, and mock education progress.

pub mod education;
pub mod mood;
