//! # Shopfront UI
//!
//! Dioxus Desktop UI for Shopfront Admin.
//!
//! This crate renders the product-creation form and its category picker:
//!
//! - Add Product form with schema validation and inline error messages
//! - Nested category dropdown (two-level reveal, outside-click dismissal)
//! - Dynamic variant list backed by the catalog field-array primitive
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use shopfront_catalog;
pub use shopfront_core;

// Re-export main components
pub use app::App;
pub use components::{
    CategoryPicker, FileInput, ProductForm, Select, SelectOption, TextArea, TextInput, VariantList,
};
pub use hooks::{ClickBus, notify_outside_click, use_outside_click};
pub use state::{APP_STATE, AppState, StatusLevel, StatusMessage, init_app_state};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Shopfront Admin";

/// Application display title
pub const TITLE: &str = "Shopfront Admin - Add Product";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Shopfront Admin desktop application
///
/// This is the main entry point for the Dioxus desktop app.
/// It initializes the application state and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     shopfront_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    init_app_state();

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Launch with a custom window title and size
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{} (custom config)", NAME, VERSION);

    init_app_state();

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Shopfront Admin");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Add Product"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".field-error"));
    }
}
