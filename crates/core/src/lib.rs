//! # Shopfront Core
//!
//! Core types and error handling for Shopfront Admin.
//!
//! This crate provides the foundational building blocks used throughout
//! the Shopfront Admin application, including:
//!
//! - **Types**: The product domain types (`ProductDraft`, `VariantOption`,
//!   `ProductStatus`)
//! - **Errors**: Unified error handling with `AdminError` and `AdminResult`
//!

pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{AdminError, AdminResult};
pub use types::{ProductDraft, ProductStatus, VariantOption};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
