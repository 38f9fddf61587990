//! UI components for ParentDash
//!
//! This module contains all user interface components built with Dioxus.

pub mod age_content;
pub mod components;
pub mod education;
pub mod layout;
pub mod mood;
pub mod privacy;

pub use layout::Layout;
