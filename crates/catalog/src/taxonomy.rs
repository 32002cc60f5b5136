//! Category taxonomy for the product form
//!
//! A fixed two-level mapping from category name to an ordered list of
//! subcategory names. The taxonomy is built once at startup and never
//! edited by the user; both category and subcategory order are display
//! order and must be preserved, so the backing store is an ordered `Vec`
//! rather than a hash map.

use serde::{Deserialize, Serialize};
use shopfront_core::{AdminError, AdminResult};

// ============================================================================
// CategoryEntry
// ============================================================================

/// One top-level category with its ordered subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category name (unique within the taxonomy)
    pub name: String,

    /// Ordered subcategory names; empty means the category is a terminal,
    /// immediately-selectable leaf
    pub subcategories: Vec<String>,
}

// ============================================================================
// CategoryTaxonomy
// ============================================================================

/// Two-level category → subcategory mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTaxonomy {
    entries: Vec<CategoryEntry>,
}

impl CategoryTaxonomy {
    /// Create an empty taxonomy
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a category with its subcategories
    ///
    /// Category keys are unique; inserting an existing key is an error.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        subcategories: Vec<String>,
    ) -> AdminResult<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(AdminError::DuplicateCategory(name));
        }
        self.entries.push(CategoryEntry {
            name,
            subcategories,
        });
        Ok(())
    }

    /// Check whether a category key exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Iterate over category names in display order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Subcategories of a category, in display order
    ///
    /// Unknown category keys yield an empty slice rather than panicking;
    /// a malformed lookup then behaves like a leaf category.
    pub fn subcategories(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.subcategories.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a category has zero subcategories (terminal leaf)
    pub fn is_leaf(&self, name: &str) -> bool {
        self.subcategories(name).is_empty()
    }

    /// Number of top-level categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the taxonomy has no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryTaxonomy {
    /// The built-in retail taxonomy shipped with the form
    fn default() -> Self {
        let mut taxonomy = Self::new();
        let seed: &[(&str, &[&str])] = &[
            (
                "Animals & Pet Supplies",
                &["Pet Food", "Pet Toys", "Pet Accessories"],
            ),
            ("Apparel & Accessories", &["Clothing", "Shoes", "Jewelry"]),
            ("Arts & Entertainment", &["Books", "Music", "Movies"]),
            ("Baby & Toddler", &["Clothing", "Toys", "Baby Care"]),
            (
                "Business & Industrial",
                &["Office Supplies", "Industrial Equipment"],
            ),
            ("Cameras & Optics", &["Cameras", "Lenses", "Accessories"]),
            ("Electronics", &["Phones", "Computers", "TVs"]),
            (
                "Food, Beverages & Tobacco",
                &["Snacks", "Beverages", "Cigarettes"],
            ),
        ];

        for (name, subs) in seed {
            let subs = subs.iter().map(|s| s.to_string()).collect();
            // Seed keys are distinct string literals, insert cannot fail
            let _ = taxonomy.insert(*name, subs);
        }
        taxonomy
    }
}

// ============================================================================
// Tests
// ============================================================================
