//! Raw form values and draft finalization
//!
//! The form binds to values exactly as the merchant typed them: text
//! fields are plain strings and the three amount fields stay raw so the
//! schema can distinguish "left empty" (allowed) from "not a number"
//! (rejected). [`ProductFormValues::finalize`] runs the full schema and
//! only then converts into the domain [`ProductDraft`].

use crate::field_array::FieldArray;
use crate::schema::ProductSchema;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shopfront_core::{AdminError, AdminResult, ProductDraft, ProductStatus, VariantOption};
use std::path::PathBuf;

// ============================================================================
// VariantValues
// ============================================================================

/// As-typed values of one variant row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantValues {
    /// Option name, e.g. "Size"
    pub option_name: String,

    /// Delimited option values, e.g. "S, M, L"
    pub option_values: String,
}

// ============================================================================
// ProductFormValues
// ============================================================================

/// The complete as-typed state of the product form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFormValues {
    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Selected media files
    pub media: Vec<PathBuf>,

    /// Completed category selection from the picker
    pub category: String,

    /// Raw price text ("" when unset)
    pub price: String,

    /// Raw compare-at price text
    pub compare_at_price: String,

    /// Raw cost-per-item text
    pub cost_per_item: String,

    /// Status select value
    pub status: String,

    /// Product type
    pub product_type: String,

    /// Vendor name
    pub vendor: String,

    /// Optional collections text
    pub collections: String,

    /// Optional tags text
    pub tags: String,

    /// Variant rows
    pub variants: FieldArray<VariantValues>,
}

impl Default for ProductFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            media: Vec::new(),
            category: String::new(),
            price: String::new(),
            compare_at_price: String::new(),
            cost_per_item: String::new(),
            // The status select shows Active preselected
            status: ProductStatus::Active.as_str().to_string(),
            product_type: String::new(),
            vendor: String::new(),
            collections: String::new(),
            tags: String::new(),
            variants: FieldArray::new(),
        }
    }
}

impl ProductFormValues {
    /// Create a blank form
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the full record and convert into a domain draft
    ///
    /// Fails with a joined [`AdminError::Validation`] when any schema rule
    /// fails; the completion handler must never see a partially valid
    /// draft.
    pub fn finalize(&self) -> AdminResult<ProductDraft> {
        let report = ProductSchema::new().validate(self);
        if !report.is_valid() {
            return Err(AdminError::validation(report.join_messages("; ")));
        }

        let variants = self
            .variants
            .values()
            .map(|v| VariantOption::new(v.option_name.trim(), v.option_values.trim()))
            .collect();

        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            media: self.media.clone(),
            category: self.category.clone(),
            price: parse_amount("price", &self.price)?,
            compare_at_price: parse_amount("compareAtPrice", &self.compare_at_price)?,
            cost_per_item: parse_amount("costPerItem", &self.cost_per_item)?,
            status: ProductStatus::parse(&self.status)?,
            product_type: self.product_type.trim().to_string(),
            vendor: self.vendor.trim().to_string(),
            collections: non_empty(&self.collections),
            tags: non_empty(&self.tags),
            variants,
            created_at: Utc::now(),
        })
    }
}

/// Parse a raw amount field
///
/// Empty text means the optional field was left unset. Non-numeric or
/// non-finite text is an [`AdminError::InvalidAmount`]; the ≥ 0 rule is
/// the schema's concern, not the parser's.
pub fn parse_amount(field: &str, raw: &str) -> AdminResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(AdminError::InvalidAmount {
            field: field.to_string(),
            raw: raw.to_string(),
        }),
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A fully valid Add Product record
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
    fn test_parse_amount_empty_is_unset() {
        assert_eq!(parse_amount("price", "").unwrap(), None);
        assert_eq!(parse_amount("price", "   ").unwrap(), None);
    }

    #[test]
    fn test_parse_amount_values() {
        assert_eq!(parse_amount("price", "0").unwrap(), Some(0.0));
        assert_eq!(parse_amount("price", "19.99").unwrap(), Some(19.99));
        assert_eq!(parse_amount("price", "-5").unwrap(), Some(-5.0));
    }

    #[test]
    fn test_parse_amount_rejects_text_and_non_finite() {
        assert!(parse_amount("price", "abc").is_err());
        assert!(parse_amount("price", "NaN").is_err());
        assert!(parse_amount("price", "inf").is_err());
    }

    #[test]
    fn test_finalize_success_end_to_end() {
        let draft = filled_values().finalize().unwrap();

        assert_eq!(draft.title, "Short sleeve t-shirt");
        assert_eq!(draft.description, "Cotton tee");
        assert_eq!(draft.media.len(), 1);
        assert_eq!(draft.category, "Electronics > Phones");
        assert_eq!(draft.price, Some(19.99));
        assert_eq!(draft.compare_at_price, None);
        assert_eq!(draft.cost_per_item, None);
        assert_eq!(draft.status, ProductStatus::Active);
        assert_eq!(draft.product_type, "Shirt");
        assert_eq!(draft.vendor, "Acme");
        assert_eq!(draft.collections, None);
        assert_eq!(draft.tags, None);
        assert_eq!(
            draft.variants,
            vec![VariantOption::new("Size", "S, M, L")]
        );
    }

    #[test]
    fn test_finalize_blocked_by_schema() {
        let mut values = filled_values();
        values.price = "-5".to_string();
        let err = values.finalize().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Price must be at least 0"));
    }

    #[test]
    fn test_finalize_trims_text_and_drops_empty_optionals() {
        let mut values = filled_values();
        values.title = "  Tee  ".to_string();
        values.collections = "  ".to_string();
        values.tags = " summer ".to_string();

        let draft = values.finalize().unwrap();
        assert_eq!(draft.title, "Tee");
        assert_eq!(draft.collections, None);
        assert_eq!(draft.tags, Some("summer".to_string()));
    }
}
