//! # Shopfront Catalog
//!
//! UI-independent building blocks for the Shopfront Admin product form:
//!
//! - **Taxonomy**: the fixed two-level category → subcategory mapping
//! - **Picker**: the nested-dropdown selection state machine
//! - **Field array**: an ordered, keyed collection primitive for the
//!   dynamic variant list
//! - **Schema**: per-field validation rules with inline error messages
//! - **Form**: raw as-typed field values and finalization into a
//!   [`ProductDraft`](shopfront_core::ProductDraft)
//!
//! Nothing in this crate depends on a rendering framework; all of it is
//! testable headlessly.

pub mod field_array;
pub mod form;
pub mod picker;
pub mod schema;
pub mod taxonomy;

// Re-export commonly used items at crate root
pub use field_array::{FieldArray, FieldEntry};
pub use form::{ProductFormValues, VariantValues, parse_amount};
pub use picker::{PickerPhase, PickerState};
pub use schema::{FieldError, ProductSchema, ValidationReport};
pub use taxonomy::CategoryTaxonomy;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
