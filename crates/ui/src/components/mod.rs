//! # UI Components
//!
//! Dioxus components for the Shopfront Admin product form:
//!
//! - **Inputs**: labeled form controls with inline error rendering
//! - **CategoryPicker**: the nested two-level category dropdown
//! - **VariantList**: the dynamic list of variant option rows
//! - **ProductForm**: the Add Product form tying it all together
//!
//! ## Component Hierarchy
//!
//! ```text
//! ProductForm
//! ├── TextInput / TextArea / Select / FileInput (per field)
//! ├── CategoryPicker
//! │   ├── trigger button
//! │   └── dropdown panel (top-level list | subcategory list + Back)
//! └── VariantList
//!     └── VariantRow (multiple)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category_picker;
pub mod inputs;
pub mod product_form;
pub mod variant_list;

// ============================================================================
// Re-exports
// ============================================================================

pub use category_picker::CategoryPicker;
pub use inputs::{FileInput, Select, SelectOption, TextArea, TextInput};
pub use product_form::ProductForm;
pub use variant_list::{VariantList, VariantRowView};
