//! Domain types for Shopfront Admin
//!
//! This module defines the product domain model: the validated draft that
//! the form hands to its completion handler, the variant option entries,
//! and the fixed product status set.

use crate::error::{AdminError, AdminResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// ProductStatus
// ============================================================================

/// Publication status of a product
///
/// A fixed enumerated set; the form's status select offers exactly these
/// values and the schema rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible in the storefront
    #[default]
    Active,
    /// Hidden from the storefront
    Inactive,
}

impl ProductStatus {
    /// All members of the status set, in display order
    pub fn all() -> &'static [ProductStatus] {
        &[ProductStatus::Active, ProductStatus::Inactive]
    }

    /// The wire/form value for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    /// Human-readable label for this status
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
        }
    }

    /// Parse a form value into a status
    pub fn parse(value: &str) -> AdminResult<Self> {
        match value {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            other => Err(AdminError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VariantOption
// ============================================================================

/// A single product variant option, e.g. Size = "S, M, L"
///
/// `option_values` is kept as the free-form delimited text the merchant
/// typed; [`VariantOption::values`] splits it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    /// Option name, e.g. "Size" or "Color"
    pub option_name: String,

    /// Comma-delimited option values, e.g. "S, M, L"
    pub option_values: String,
}

impl VariantOption {
    /// Create a new variant option
    pub fn new(option_name: impl Into<String>, option_values: impl Into<String>) -> Self {
        Self {
            option_name: option_name.into(),
            option_values: option_values.into(),
        }
    }

    /// Split the delimited value list into individual trimmed values
    ///
    /// Blank segments (e.g. from a trailing comma) are dropped.
    pub fn values(&self) -> Vec<&str> {
        self.option_values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

// ============================================================================
// ProductDraft
// ============================================================================

/// A fully validated product draft
///
/// Produced only after the form schema passes; invariants (non-empty
/// required fields, non-negative amounts, fully populated variants) are
/// established by the schema, not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Selected media files (at least one)
    pub media: Vec<PathBuf>,

    /// Category selection, either a bare leaf category or
    /// "Category > Subcategory"
    pub category: String,

    /// Selling price, if set (non-negative)
    pub price: Option<f64>,

    /// Compare-at price, if set (non-negative)
    pub compare_at_price: Option<f64>,

    /// Cost per item, if set (non-negative)
    pub cost_per_item: Option<f64>,

    /// Publication status
    pub status: ProductStatus,

    /// Product type, e.g. "Shirt"
    pub product_type: String,

    /// Vendor name
    pub vendor: String,

    /// Optional collections text
    pub collections: Option<String>,

    /// Optional tags text
    pub tags: Option<String>,

    /// Variant options, in the order the merchant entered them
    pub variants: Vec<VariantOption>,

    /// When the draft was finalized
    pub created_at: DateTime<Utc>,
}

impl ProductDraft {
    /// Serialize the draft to pretty JSON for logging/handoff
    pub fn to_json(&self) -> AdminResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_round_trip() {
        for status in ProductStatus::all() {
            assert_eq!(ProductStatus::parse(status.as_str()).unwrap(), *status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = ProductStatus::parse("archived").unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProductStatus::Active.label(), "Active");
        assert_eq!(ProductStatus::Inactive.label(), "Inactive");
        assert_eq!(ProductStatus::Active.to_string(), "active");
    }

    #[test]
    fn test_variant_values_split() {
        let variant = VariantOption::new("Size", "S, M, L");
        assert_eq!(variant.values(), vec!["S", "M", "L"]);
    }

    #[test]
    fn test_variant_values_drops_blanks() {
        let variant = VariantOption::new("Size", "S,, M, ");
        assert_eq!(variant.values(), vec!["S", "M"]);
    }

    #[test]
    fn test_draft_to_json() {
        let draft = ProductDraft {
            title: "Short sleeve t-shirt".to_string(),
            description: "Cotton tee".to_string(),
            media: vec![PathBuf::from("tee.png")],
            category: "Electronics > Phones".to_string(),
            price: Some(19.99),
            compare_at_price: None,
            cost_per_item: None,
            status: ProductStatus::Active,
            product_type: "Shirt".to_string(),
            vendor: "Acme".to_string(),
            collections: None,
            tags: None,
            variants: vec![VariantOption::new("Size", "S, M, L")],
            created_at: Utc::now(),
        };

        let json = draft.to_json().unwrap();
        assert!(json.contains("\"status\": \"active\""));
        assert!(json.contains("Short sleeve t-shirt"));
    }
}
