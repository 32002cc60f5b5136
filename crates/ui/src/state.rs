//! Application State Management for Shopfront Admin
//!
//! Centralized state using Dioxus Signals: the status-bar message and the
//! log of drafts the form has handed to its completion handler. Form field
//! values themselves are component-local; nothing in here persists.

use dioxus::prelude::*;
use shopfront_core::ProductDraft;

// ============================================================================
// Status Message
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    /// CSS class for rendering this level
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// AppState
// ============================================================================

/// Top-level application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Drafts successfully submitted this session, newest last
    pub submissions: Vec<ProductDraft>,

    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Create the initial application state
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            status_message: Some(StatusMessage {
                text: "Ready".to_string(),
                level: StatusLevel::Info,
            }),
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Record a successfully submitted draft
    pub fn record_submission(&mut self, draft: ProductDraft) {
        self.set_status(
            format!("Product draft '{}' submitted", draft.title),
            StatusLevel::Success,
        );
        self.submissions.push(draft);
    }

    /// Number of drafts submitted this session
    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Initialize the global app state
///
/// Call this once at app startup.
pub fn init_app_state() {
    // State is initialized with defaults via Signal::global
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shopfront_core::{ProductStatus, VariantOption};
    use std::path::PathBuf;

    fn draft() -> ProductDraft {
        ProductDraft {
            title: "Tee".to_string(),
            description: "Cotton tee".to_string(),
            media: vec![PathBuf::from("tee.png")],
            category: "Apparel & Accessories > Clothing".to_string(),
            price: Some(9.99),
            compare_at_price: None,
            cost_per_item: None,
            status: ProductStatus::Active,
            product_type: "Shirt".to_string(),
            vendor: "Acme".to_string(),
            collections: None,
            tags: None,
            variants: vec![VariantOption::new("Size", "S, M")],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.submission_count(), 0);
        assert_eq!(
            state.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Info)
        );
    }

    #[test]
    fn test_record_submission_updates_status() {
        let mut state = AppState::new();
        state.record_submission(draft());
        assert_eq!(state.submission_count(), 1);

        let status = state.status_message.unwrap();
        assert_eq!(status.level, StatusLevel::Success);
        assert!(status.text.contains("Tee"));
    }

    #[test]
    fn test_clear_status() {
        let mut state = AppState::new();
        state.clear_status();
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(StatusLevel::Info.class(), "status-info");
        assert_eq!(StatusLevel::Success.class(), "status-success");
        assert_eq!(StatusLevel::Error.class(), "status-error");
    }
}
