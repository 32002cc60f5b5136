//! # Product Form Component
//!
//! The Add Product form: labeled fields bound to
//! [`ProductFormValues`](shopfront_catalog::ProductFormValues), schema
//! validation re-run on every change, and a dynamic variant list. Errors
//! render inline beside their field; a field's error is shown once the
//! field has been touched, or unconditionally after the first submit
//! attempt. On a fully valid submit the finalized
//! [`ProductDraft`](shopfront_core::ProductDraft) is handed to the
//! caller's completion handler; nothing is emitted otherwise.

use dioxus::prelude::*;
use shopfront_catalog::{CategoryTaxonomy, ProductFormValues, ProductSchema, VariantValues};
use shopfront_core::{ProductDraft, ProductStatus};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::components::category_picker::CategoryPicker;
use crate::components::inputs::{FileInput, Select, SelectOption, TextArea, TextInput};
use crate::components::variant_list::{VariantList, VariantRowView};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Component Props
// ============================================================================

/// Properties for ProductForm component
#[derive(Props, Clone, PartialEq)]
pub struct ProductFormProps {
    /// Category taxonomy offered by the picker; defaults to the built-in
    /// retail taxonomy
    #[props(default)]
    pub taxonomy: CategoryTaxonomy,

    /// Completion handler, invoked only after full validation success
    #[props(default)]
    pub on_submit: EventHandler<ProductDraft>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Add Product form
#[component]
pub fn ProductForm(props: ProductFormProps) -> Element {
    let mut values = use_signal(ProductFormValues::new);
    let mut touched = use_signal(HashSet::<String>::new);
    let mut submitted = use_signal(|| false);

    // Full-record validation on every render keeps errors live: a failing
    // field clears the moment the merchant corrects it.
    let report = ProductSchema::new().validate(&values.read());
    let show_all = *submitted.read();

    let touched_fields = touched.read();
    let error_for = |field: &str| -> Option<String> {
        if show_all || touched_fields.contains(field) {
            report.error_for(field).map(str::to_string)
        } else {
            None
        }
    };

    let title_error = error_for("title");
    let description_error = error_for("description");
    let media_error = error_for("media");
    let category_error = error_for("category");
    let price_error = error_for("price");
    let compare_at_error = error_for("compareAtPrice");
    let cost_error = error_for("costPerItem");
    let status_error = error_for("status");
    let product_type_error = error_for("productType");
    let vendor_error = error_for("vendor");

    let form = values.read();
    let variant_rows: Vec<VariantRowView> = form
        .variants
        .iter()
        .enumerate()
        .map(|(index, entry)| VariantRowView {
            key: entry.key.to_string(),
            option_name: entry.value.option_name.clone(),
            option_values: entry.value.option_values.clone(),
            name_error: error_for(&format!("variants.{index}.optionName")),
            values_error: error_for(&format!("variants.{index}.optionValues")),
        })
        .collect();

    let status_options: Vec<SelectOption> = ProductStatus::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect();

    let title = form.title.clone();
    let description = form.description.clone();
    let media = form.media.clone();
    let price = form.price.clone();
    let compare_at_price = form.compare_at_price.clone();
    let cost_per_item = form.cost_per_item.clone();
    let status = form.status.clone();
    let product_type = form.product_type.clone();
    let vendor = form.vendor.clone();
    let collections = form.collections.clone();
    let tags = form.tags.clone();
    drop(form);
    drop(touched_fields);

    // Submission: re-validate the full record; the completion handler only
    // ever sees a draft that passed every rule.
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        submitted.set(true);

        let report = ProductSchema::new().validate(&values.read());
        if !report.is_valid() {
            tracing::debug!(errors = report.len(), "submission blocked by validation");
            APP_STATE.write().set_status(
                format!("{} field(s) need attention", report.len()),
                StatusLevel::Error,
            );
            return;
        }

        match values.read().finalize() {
            Ok(draft) => {
                tracing::info!(title = %draft.title, "product draft submitted");
                props.on_submit.call(draft);
            }
            Err(err) => {
                // Schema passed, so this is unreachable in practice
                tracing::error!(%err, "draft finalization failed");
                APP_STATE
                    .write()
                    .set_status(err.to_string(), StatusLevel::Error);
            }
        }
    };

    rsx! {
        div {
            class: "form-card",

            h2 { class: "text-xl font-bold mb-6", "Add Product" }

            form {
                onsubmit: handle_submit,

                TextInput {
                    value: title,
                    label: "Title",
                    placeholder: "Short sleeve t-shirt",
                    required: true,
                    error: title_error,
                    on_change: move |v: String| {
                        values.write().title = v;
                        touched.write().insert("title".to_string());
                    },
                }

                TextArea {
                    value: description,
                    label: "Description",
                    placeholder: "Description",
                    required: true,
                    error: description_error,
                    on_change: move |v: String| {
                        values.write().description = v;
                        touched.write().insert("description".to_string());
                    },
                }

                FileInput {
                    files: media,
                    label: "Media",
                    dialog_title: "Select product media",
                    required: true,
                    error: media_error,
                    on_change: move |paths: Vec<PathBuf>| {
                        values.write().media = paths;
                        touched.write().insert("media".to_string());
                    },
                }

                CategoryPicker {
                    taxonomy: props.taxonomy.clone(),
                    label: "Category",
                    required: true,
                    error: category_error,
                    on_select: move |selected: String| {
                        values.write().category = selected;
                        touched.write().insert("category".to_string());
                    },
                }

                div {
                    class: "flex gap-4",

                    TextInput {
                        value: price,
                        label: "Price",
                        placeholder: "0.00",
                        input_type: "number",
                        error: price_error,
                        on_change: move |v: String| {
                            values.write().price = v;
                            touched.write().insert("price".to_string());
                        },
                    }

                    TextInput {
                        value: compare_at_price,
                        label: "Compare-at price",
                        placeholder: "0.00",
                        input_type: "number",
                        error: compare_at_error,
                        on_change: move |v: String| {
                            values.write().compare_at_price = v;
                            touched.write().insert("compareAtPrice".to_string());
                        },
                    }

                    TextInput {
                        value: cost_per_item,
                        label: "Cost per item",
                        placeholder: "0.00",
                        input_type: "number",
                        error: cost_error,
                        on_change: move |v: String| {
                            values.write().cost_per_item = v;
                            touched.write().insert("costPerItem".to_string());
                        },
                    }
                }

                Select {
                    value: status,
                    options: status_options,
                    label: "Status",
                    required: true,
                    error: status_error,
                    on_change: move |v: String| {
                        values.write().status = v;
                        touched.write().insert("status".to_string());
                    },
                }

                TextInput {
                    value: product_type,
                    label: "Product Type",
                    placeholder: "Product Type",
                    required: true,
                    error: product_type_error,
                    on_change: move |v: String| {
                        values.write().product_type = v;
                        touched.write().insert("productType".to_string());
                    },
                }

                TextInput {
                    value: vendor,
                    label: "Vendor",
                    placeholder: "Vendor",
                    required: true,
                    error: vendor_error,
                    on_change: move |v: String| {
                        values.write().vendor = v;
                        touched.write().insert("vendor".to_string());
                    },
                }

                TextInput {
                    value: collections,
                    label: "Collections",
                    placeholder: "Collections",
                    on_change: move |v: String| {
                        values.write().collections = v;
                    },
                }

                TextInput {
                    value: tags,
                    label: "Tags",
                    placeholder: "Tags",
                    on_change: move |v: String| {
                        values.write().tags = v;
                    },
                }

                VariantList {
                    rows: variant_rows,
                    on_name_change: move |(index, text): (usize, String)| {
                        if let Some(row) = values.write().variants.get_mut(index) {
                            row.option_name = text;
                        }
                        touched
                            .write()
                            .insert(format!("variants.{index}.optionName"));
                    },
                    on_values_change: move |(index, text): (usize, String)| {
                        if let Some(row) = values.write().variants.get_mut(index) {
                            row.option_values = text;
                        }
                        touched
                            .write()
                            .insert(format!("variants.{index}.optionValues"));
                    },
                    on_remove: move |index: usize| {
                        if let Err(err) = values.write().variants.remove(index) {
                            tracing::warn!(%err, "variant removal out of range");
                        }
                    },
                    on_append: move |_| {
                        values.write().variants.append(VariantValues::default());
                    },
                }

                div {
                    class: "flex items-center justify-between mt-6",
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        "Submit"
                    }
                }
            }
        }
    }
}
