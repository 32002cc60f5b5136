//! # Input Components
//!
//! Reusable form input components for the Shopfront Admin UI:
//! - **TextInput**: single-line text input
//! - **TextArea**: multi-line text input
//! - **Select**: dropdown selection over a fixed option set
//! - **FileInput**: native multi-file picker backed by `rfd`
//!
//! Each component renders its label, the control, and either the field's
//! inline error or its help text.

use dioxus::prelude::*;
use rfd::AsyncFileDialog;
use std::path::PathBuf;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, number, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Blur handler
    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "help-text", "{help}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Blur handler
    #[props(default)]
    pub on_blur: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onblur: {
                    let value = props.value.clone();
                    move |_| props.on_blur.call(value.clone())
                },
                "{props.value}"
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "help-text", "{help}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component over a fixed option set
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// File Input Component
// ============================================================================

/// Properties for FileInput component
#[derive(Props, Clone, PartialEq)]
pub struct FileInputProps {
    /// Currently selected files
    pub files: Vec<PathBuf>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Dialog title
    #[props(default = "Select files".to_string())]
    pub dialog_title: String,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Change handler, called with the full new selection
    #[props(default)]
    pub on_change: EventHandler<Vec<PathBuf>>,
}

/// Multi-file picker backed by the native file dialog
#[component]
pub fn FileInput(props: FileInputProps) -> Element {
    let on_change = props.on_change;
    let dialog_title = props.dialog_title.clone();

    let open_dialog = move |_| {
        let dialog_title = dialog_title.clone();
        spawn(async move {
            if let Some(files) = AsyncFileDialog::new()
                .set_title(&dialog_title)
                .pick_files()
                .await
            {
                let paths: Vec<PathBuf> =
                    files.iter().map(|f| f.path().to_path_buf()).collect();
                tracing::debug!(count = paths.len(), "media files selected");
                on_change.call(paths);
            }
        });
    };

    let file_names: Vec<String> = props.files.iter().map(file_display_name).collect();
    let has_files = !file_names.is_empty();
    let file_list = file_names.join(", ");

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            div {
                class: "flex items-center gap-3",

                button {
                    r#type: "button",
                    class: "btn-secondary",
                    onclick: open_dialog,
                    "Choose files"
                }

                if has_files {
                    span { class: "text-sm text-slate-300", "{file_list}" }
                } else {
                    span { class: "help-text", "No files selected" }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["w-full", "text-sm", "transition-colors"];

    if has_error {
        classes.push("border-rose-500");
    } else {
        classes.push("border-slate-700");
    }

    if disabled {
        classes.push("opacity-50");
        classes.push("cursor-not-allowed");
    }

    classes.join(" ")
}

/// Short display name for a selected file
fn file_display_name(path: &PathBuf) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Tests
// ============================================================================
