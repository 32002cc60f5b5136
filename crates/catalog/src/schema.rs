//! Product form validation schema
//!
//! One rule per field, re-run in full on submit and per field on change.
//! Every failure is recoverable by user correction; a failure is nothing
//! more than a human-readable message attached to a field path. Field
//! paths follow the form's field names (`title`, `compareAtPrice`,
//! `variants.2.optionName`, ...).

use crate::form::{ProductFormValues, parse_amount};
use serde::{Deserialize, Serialize};
use shopfront_core::ProductStatus;

// ============================================================================
// FieldError
// ============================================================================

/// A validation message attached to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field path, e.g. "price" or "variants.0.optionName"
    pub field: String,

    /// Human-readable message shown inline beside the control
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// ValidationReport
// ============================================================================

/// Outcome of a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report carries no errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Attach an error
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// All errors in schema order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message attached to an exact field path, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All errors whose path starts with a prefix (e.g. "variants.")
    pub fn errors_for_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.errors.iter().filter(move |e| e.field.starts_with(prefix))
    }

    /// Join all messages with a separator
    pub fn join_messages(&self, separator: &str) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

// ============================================================================
// ProductSchema
// ============================================================================

/// The product form's validation schema
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductSchema;

impl ProductSchema {
    /// Create the schema
    pub fn new() -> Self {
        Self
    }

    /// Validate the full record
    pub fn validate(&self, values: &ProductFormValues) -> ValidationReport {
        let mut report = ValidationReport::new();

        check_required(&mut report, "title", &values.title, "Title is required");
        check_required(
            &mut report,
            "description",
            &values.description,
            "Description is required",
        );

        if values.media.is_empty() {
            report.add("media", "Media is required");
        }

        check_required(
            &mut report,
            "category",
            &values.category,
            "Category is required",
        );

        check_amount(&mut report, "price", &values.price, "Price");
        check_amount(
            &mut report,
            "compareAtPrice",
            &values.compare_at_price,
            "Compare-at price",
        );
        check_amount(
            &mut report,
            "costPerItem",
            &values.cost_per_item,
            "Cost per item",
        );

        if values.status.trim().is_empty() {
            report.add("status", "Status is required");
        } else if ProductStatus::parse(&values.status).is_err() {
            report.add("status", "Status must be active or inactive");
        }

        check_required(
            &mut report,
            "productType",
            &values.product_type,
            "Product type is required",
        );
        check_required(&mut report, "vendor", &values.vendor, "Vendor is required");

        // collections and tags are optional free text, no rule

        for (index, variant) in values.variants.values().enumerate() {
            if variant.option_name.trim().is_empty() {
                report.add(
                    format!("variants.{index}.optionName"),
                    "option name is required",
                );
            }
            if variant.option_values.trim().is_empty() {
                report.add(
                    format!("variants.{index}.optionValues"),
                    "option values are required",
                );
            }
        }

        report
    }

    /// Re-check a single field, for live error clearing on change
    pub fn validate_field(&self, values: &ProductFormValues, field: &str) -> Option<FieldError> {
        self.validate(values)
            .errors()
            .iter()
            .find(|e| e.field == field)
            .cloned()
    }
}

fn check_required(report: &mut ValidationReport, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        report.add(field, message);
    }
}

fn check_amount(report: &mut ValidationReport, field: &str, raw: &str, label: &str) {
    match parse_amount(field, raw) {
        Ok(None) => {}
        Ok(Some(value)) if value >= 0.0 => {}
        Ok(Some(_)) => report.add(field, format!("{label} must be at least 0")),
        Err(_) => report.add(field, format!("{label} must be a number")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::VariantValues;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn filled_values() -> ProductFormValues {
        let mut values = ProductFormValues::new();
        values.title = "Short sleeve t-shirt".to_string();
        values.description = "Cotton tee".to_string();
        values.media = vec![PathBuf::from("tee.png")];
        values.category = "Electronics > Phones".to_string();
        values.price = "19.99".to_string();
        values.status = "active".to_string();
        values.product_type = "Shirt".to_string();
        values.vendor = "Acme".to_string();
        values.variants.append(VariantValues {
            option_name: "Size".to_string(),
            option_values: "S, M, L".to_string(),
        });
        values
    }

    #[test]
    fn test_filled_record_passes() {
        let report = ProductSchema::new().validate(&filled_values());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn test_each_required_field_yields_exactly_one_error() {
        let cases: &[(&str, fn(&mut ProductFormValues), &str)] = &[
            ("title", |v| v.title.clear(), "Title is required"),
            (
                "description",
                |v| v.description.clear(),
                "Description is required",
            ),
            ("category", |v| v.category.clear(), "Category is required"),
            (
                "productType",
                |v| v.product_type.clear(),
                "Product type is required",
            ),
            ("vendor", |v| v.vendor.clear(), "Vendor is required"),
            ("status", |v| v.status.clear(), "Status is required"),
        ];

        for (field, clear, message) in cases {
            let mut values = filled_values();
            clear(&mut values);
            let report = ProductSchema::new().validate(&values);
            assert_eq!(report.len(), 1, "field {field}");
            assert_eq!(report.error_for(field), Some(*message));
        }
    }

    #[test]
    fn test_empty_media_is_an_error() {
        let mut values = filled_values();
        values.media.clear();
        let report = ProductSchema::new().validate(&values);
        assert_eq!(report.len(), 1);
        assert_eq!(report.error_for("media"), Some("Media is required"));
    }

    #[test]
    fn test_amount_rules() {
        let schema = ProductSchema::new();

        // Negative is rejected
        let mut values = filled_values();
        values.price = "-5".to_string();
        let report = schema.validate(&values);
        assert_eq!(report.len(), 1);
        assert_eq!(report.error_for("price"), Some("Price must be at least 0"));

        // Exactly zero is accepted
        values.price = "0".to_string();
        assert!(schema.validate(&values).is_valid());

        // Absent is accepted
        values.price = String::new();
        assert!(schema.validate(&values).is_valid());

        // Non-numeric text is rejected
        values.price = "abc".to_string();
        let report = schema.validate(&values);
        assert_eq!(report.error_for("price"), Some("Price must be a number"));
    }

    #[test]
    fn test_amount_messages_per_field() {
        let mut values = filled_values();
        values.compare_at_price = "-1".to_string();
        values.cost_per_item = "-1".to_string();
        let report = ProductSchema::new().validate(&values);
        assert_eq!(
            report.error_for("compareAtPrice"),
            Some("Compare-at price must be at least 0")
        );
        assert_eq!(
            report.error_for("costPerItem"),
            Some("Cost per item must be at least 0")
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let mut values = filled_values();
        values.status = "archived".to_string();
        let report = ProductSchema::new().validate(&values);
        assert_eq!(
            report.error_for("status"),
            Some("Status must be active or inactive")
        );
    }

    #[test]
    fn test_variant_entries_validate_per_entry() {
        let mut values = filled_values();
        values.variants.append(VariantValues::default());

        let report = ProductSchema::new().validate(&values);
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.error_for("variants.1.optionName"),
            Some("option name is required")
        );
        assert_eq!(
            report.error_for("variants.1.optionValues"),
            Some("option values are required")
        );
        // The populated first entry stays clean
        assert!(report.error_for("variants.0.optionName").is_none());
        assert_eq!(report.errors_for_prefix("variants.").count(), 2);
    }

    #[test]
    fn test_empty_variant_list_is_allowed() {
        let mut values = filled_values();
        values.variants.clear();
        assert!(ProductSchema::new().validate(&values).is_valid());
    }

    #[test]
    fn test_validate_field_live_recheck() {
        let schema = ProductSchema::new();
        let mut values = filled_values();
        values.title.clear();

        let err = schema.validate_field(&values, "title").unwrap();
        assert_eq!(err.message, "Title is required");

        values.title = "Tee".to_string();
        assert!(schema.validate_field(&values, "title").is_none());
        // Other fields are untouched by a single-field recheck
        assert!(schema.validate_field(&values, "vendor").is_none());
    }
}
