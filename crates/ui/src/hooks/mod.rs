//! # UI Hooks
//!
//! Custom Dioxus hooks for the Shopfront Admin UI.
//!
//! Currently this is the outside-click subscription used by the category
//! picker to dismiss its panel when the user clicks anywhere outside the
//! control region.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod outside_click;

// ============================================================================
// Re-exports
// ============================================================================

pub use outside_click::{ClickBus, OutsideClickGuard, notify_outside_click, use_outside_click};
