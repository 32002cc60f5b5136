//! Main Application Component for Shopfront Admin
//!
//! The root Dioxus component: header, the Add Product form, and the
//! status bar. The root container's click handler feeds the outside-click
//! bus; controls that need dismiss-on-outside-click subscribe to it and
//! stop propagation for clicks inside their own region.

use dioxus::prelude::*;
use shopfront_core::ProductDraft;

use crate::components::ProductForm;
use crate::hooks::notify_outside_click;
use crate::state::APP_STATE;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Shopfront Admin UI initialized");
    });

    // The submission's only observable effect: log the draft and record it
    // in the session state. Persistence belongs to the embedding system.
    let handle_submit = move |draft: ProductDraft| {
        match draft.to_json() {
            Ok(json) => tracing::info!("submitted product draft:\n{json}"),
            Err(err) => tracing::warn!(%err, "could not serialize draft for logging"),
        }
        APP_STATE.write().record_submission(draft);
    };

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col overflow-hidden",
            onclick: move |_| notify_outside_click(),

            Header {}

            main {
                class: "flex-1 overflow-y-auto",
                ProductForm {
                    on_submit: handle_submit,
                }
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top header with app title and session info
#[component]
fn Header() -> Element {
    let submissions = APP_STATE.read().submission_count();
    let app_name = crate::NAME;

    rsx! {
        header {
            class: "toolbar h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2 mr-4",
                span { class: "text-xl", "🛍️" }
                span { class: "font-semibold text-sm", "{app_name}" }
            }

            span {
                class: "text-xs text-slate-500 ml-auto",
                if submissions == 1 {
                    "1 draft submitted this session"
                } else {
                    "{submissions} drafts submitted this session"
                }
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar showing the latest status message
#[component]
fn StatusBar() -> Element {
    let status = APP_STATE
        .read()
        .status_message
        .clone()
        .map(|m| (m.level.class(), m.text));

    rsx! {
        footer {
            class: "status-bar",

            if let Some((level_class, text)) = status {
                span { class: "{level_class}", "{text}" }
            }
        }
    }
}
