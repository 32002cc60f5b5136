//! # Category Picker Component
//!
//! The nested two-level category dropdown: a single trigger button
//! revealing the top-level category list, then the chosen category's
//! subcategories with a Back row. All selection logic lives in
//! [`PickerState`](shopfront_catalog::PickerState); this component only
//! renders the machine and forwards interaction events.
//!
//! The form embeds this same component for its category field; there is
//! deliberately no second inline implementation of the reveal behavior.

use dioxus::prelude::*;
use shopfront_catalog::{CategoryTaxonomy, PickerPhase, PickerState};

use crate::hooks::use_outside_click;

// ============================================================================
// Component Props
// ============================================================================

/// Properties for CategoryPicker component
#[derive(Props, Clone, PartialEq)]
pub struct CategoryPickerProps {
    /// The two-level taxonomy to offer
    pub taxonomy: CategoryTaxonomy,

    /// Label text rendered above the trigger
    #[props(default)]
    pub label: Option<String>,

    /// Trigger text before any selection is made
    #[props(default = "Select category".to_string())]
    pub placeholder: String,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the field is required
    #[props(default = false)]
    pub required: bool,

    /// Called exactly once per completed selection with the final value:
    /// either a bare leaf category or "Category > Subcategory"
    #[props(default)]
    pub on_select: EventHandler<String>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Nested category dropdown
#[component]
pub fn CategoryPicker(props: CategoryPickerProps) -> Element {
    let mut picker = use_signal(PickerState::new);

    // Any pointer interaction outside the control region closes the panel,
    // discarding an in-progress choice. Clicks inside the region stop
    // propagation below, so they never reach the bus.
    use_outside_click(move || picker.write().dismiss());

    let state = picker.read();
    let phase = state.phase();
    let trigger_text = state.label(&props.placeholder).to_string();
    let pending = state.pending_category().map(str::to_string);
    drop(state);

    let categories: Vec<String> = props.taxonomy.categories().map(String::from).collect();
    let subcategories: Vec<String> = pending
        .as_deref()
        .map(|c| props.taxonomy.subcategories(c).to_vec())
        .unwrap_or_default();

    let trigger_class = if props.error.is_some() {
        "w-full text-left border-rose-500"
    } else {
        "w-full text-left"
    };

    rsx! {
        div {
            class: "input-group relative inline-block w-full",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            // Trigger
            button {
                r#type: "button",
                class: "{trigger_class}",
                onclick: move |e| {
                    e.stop_propagation();
                    picker.write().toggle();
                },
                "{trigger_text}"
            }

            // Top-level category list
            if phase == PickerPhase::TopLevel {
                div {
                    class: "dropdown-panel",
                    // Panel padding is inside the control region; clicks on
                    // it must not reach the outside-click bus.
                    onclick: move |e| e.stop_propagation(),
                    ul {
                        for category in categories {
                            li {
                                key: "{category}",
                                button {
                                    r#type: "button",
                                    class: "dropdown-row",
                                    onclick: {
                                        let category = category.clone();
                                        let taxonomy = props.taxonomy.clone();
                                        move |e: MouseEvent| {
                                            e.stop_propagation();
                                            let emitted = picker
                                                .write()
                                                .choose_category(&taxonomy, &category);
                                            if let Some(selected) = emitted {
                                                props.on_select.call(selected);
                                            }
                                        }
                                    },
                                    "{category}"
                                }
                            }
                        }
                    }
                }
            }

            // Subcategory list of the pending category
            if phase == PickerPhase::SubLevel {
                div {
                    class: "dropdown-panel",
                    onclick: move |e| e.stop_propagation(),
                    ul {
                        for subcategory in subcategories {
                            li {
                                key: "{subcategory}",
                                button {
                                    r#type: "button",
                                    class: "dropdown-row pl-8",
                                    onclick: {
                                        let subcategory = subcategory.clone();
                                        move |e: MouseEvent| {
                                            e.stop_propagation();
                                            let emitted =
                                                picker.write().choose_subcategory(&subcategory);
                                            if let Some(selected) = emitted {
                                                props.on_select.call(selected);
                                            }
                                        }
                                    },
                                    "{subcategory}"
                                }
                            }
                        }

                        li {
                            button {
                                r#type: "button",
                                class: "dropdown-row font-semibold",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    picker.write().back();
                                },
                                "Back"
                            }
                        }
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}
