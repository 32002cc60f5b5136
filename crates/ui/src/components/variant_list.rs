//! # Variant List Component
//!
//! The dynamic list of product variant rows (option name + option
//! values). The form owns the backing
//! [`FieldArray`](shopfront_catalog::FieldArray); this component renders
//! a view of it and reports append/edit/remove interactions upward by
//! row position. Row keys come from the field array so row identity
//! survives removals.

use dioxus::prelude::*;

// ============================================================================
// Row View
// ============================================================================

/// Render-ready view of one variant row
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRowView {
    /// Stable render key from the field array entry
    pub key: String,

    /// Current option name text
    pub option_name: String,

    /// Current option values text
    pub option_values: String,

    /// Inline error for the option name, if showing
    pub name_error: Option<String>,

    /// Inline error for the option values, if showing
    pub values_error: Option<String>,
}

// ============================================================================
// Component Props
// ============================================================================

/// Properties for VariantList component
#[derive(Props, Clone, PartialEq)]
pub struct VariantListProps {
    /// Rows in display order
    pub rows: Vec<VariantRowView>,

    /// Option name edited at a row position
    #[props(default)]
    pub on_name_change: EventHandler<(usize, String)>,

    /// Option values edited at a row position
    #[props(default)]
    pub on_values_change: EventHandler<(usize, String)>,

    /// Row removed by position
    #[props(default)]
    pub on_remove: EventHandler<usize>,

    /// Blank row appended at the end
    #[props(default)]
    pub on_append: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Dynamic variant option list
#[component]
pub fn VariantList(props: VariantListProps) -> Element {
    rsx! {
        div {
            class: "space-y-4",

            for (index, row) in props.rows.iter().cloned().enumerate() {
                div {
                    key: "{row.key}",
                    class: "p-4 border border-slate-700 rounded-lg space-y-2",

                    div {
                        class: "input-group",
                        label { "Variant Name" }
                        input {
                            r#type: "text",
                            value: "{row.option_name}",
                            placeholder: "Variant Name",
                            oninput: move |e| props.on_name_change.call((index, e.value())),
                        }
                        if let Some(error) = &row.name_error {
                            p { class: "field-error", "{error}" }
                        }
                    }

                    div {
                        class: "input-group",
                        label { "Option Values" }
                        input {
                            r#type: "text",
                            value: "{row.option_values}",
                            placeholder: "Option Values",
                            oninput: move |e| props.on_values_change.call((index, e.value())),
                        }
                        if let Some(error) = &row.values_error {
                            p { class: "field-error", "{error}" }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "btn-danger",
                        onclick: move |_| props.on_remove.call(index),
                        "Delete"
                    }
                }
            }

            button {
                r#type: "button",
                class: "btn-secondary",
                onclick: move |_| props.on_append.call(()),
                "Add options like size or color"
            }
        }
    }
}
