//! Nested-dropdown selection state machine
//!
//! The category picker is a two-level reveal behind a single trigger:
//! top-level categories first, then the chosen category's subcategories.
//! This module holds the headless state machine; the Dioxus component in
//! the UI crate only renders it and forwards interaction events.
//!
//! Phases: `Closed` → `TopLevel` → `SubLevel`. A completed selection is
//! emitted exactly once, either as the bare category name (leaf case) or
//! as `"Category > Subcategory"`. Opening, navigating back, and dismissal
//! never emit. `Closed` is a resting state, not a terminal one.

use crate::taxonomy::CategoryTaxonomy;
use serde::{Deserialize, Serialize};

// ============================================================================
// PickerPhase
// ============================================================================

/// Which panel of the dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PickerPhase {
    /// Dropdown closed; resting state
    #[default]
    Closed,
    /// Top-level category list visible
    TopLevel,
    /// Subcategory list of the pending category visible
    SubLevel,
}

// ============================================================================
// PickerState
// ============================================================================

/// Transient UI state of the nested dropdown
///
/// Only one of the two panels is ever visible: `TopLevel` shows the
/// category list, `SubLevel` shows the pending category's subcategories.
/// `selection` survives open/dismiss cycles; `pending` never does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PickerState {
    phase: PickerPhase,
    /// Category chosen at the top level, awaiting a subcategory
    pending: Option<String>,
    /// Most recently completed selection
    selection: Option<String>,
}

impl PickerState {
    /// Create a picker in the closed resting state with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// Whether either panel is showing
    pub fn is_open(&self) -> bool {
        self.phase != PickerPhase::Closed
    }

    /// The category awaiting a subcategory choice, if any
    pub fn pending_category(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// The most recently completed selection, if any
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Text for the trigger control: last completed selection, or the
    /// placeholder if none has been made yet
    pub fn label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.selection.as_deref().unwrap_or(placeholder)
    }

    /// Trigger activated: toggle between closed and the top-level list
    ///
    /// Closing this way discards any in-progress (not yet finalized)
    /// choice but keeps the previous completed selection.
    pub fn toggle(&mut self) {
        match self.phase {
            PickerPhase::Closed => self.phase = PickerPhase::TopLevel,
            PickerPhase::TopLevel | PickerPhase::SubLevel => self.close(),
        }
    }

    /// A top-level category was chosen
    ///
    /// Leaf categories (zero subcategories) finalize immediately and the
    /// selection is returned; otherwise the subcategory panel opens and
    /// `None` is returned.
    pub fn choose_category(
        &mut self,
        taxonomy: &CategoryTaxonomy,
        category: &str,
    ) -> Option<String> {
        if self.phase != PickerPhase::TopLevel {
            return None;
        }

        if taxonomy.is_leaf(category) {
            self.selection = Some(category.to_string());
            self.close();
            tracing::debug!(category, "leaf category selected");
            self.selection.clone()
        } else {
            self.pending = Some(category.to_string());
            self.phase = PickerPhase::SubLevel;
            None
        }
    }

    /// A subcategory of the pending category was chosen
    ///
    /// Finalizes the composite `"Category > Subcategory"` selection and
    /// closes the dropdown. Returns `None` when no category is pending.
    pub fn choose_subcategory(&mut self, subcategory: &str) -> Option<String> {
        if self.phase != PickerPhase::SubLevel {
            return None;
        }
        let category = self.pending.take()?;
        let selected = format!("{category} > {subcategory}");
        self.selection = Some(selected);
        self.close();
        tracing::debug!(selection = ?self.selection, "subcategory selected");
        self.selection.clone()
    }

    /// Back control activated: return to the top-level list, discarding
    /// the in-progress subcategory choice
    pub fn back(&mut self) {
        if self.phase == PickerPhase::SubLevel {
            self.pending = None;
            self.phase = PickerPhase::TopLevel;
        }
    }

    /// Pointer interaction outside the control region: close without
    /// finalizing anything
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.close();
        }
    }

    fn close(&mut self) {
        self.phase = PickerPhase::Closed;
        self.pending = None;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn taxonomy() -> CategoryTaxonomy {
        let mut t = CategoryTaxonomy::new();
        t.insert("Electronics", vec!["Phones".into(), "TVs".into()])
            .unwrap();
        t.insert("Gift Cards", vec![]).unwrap();
        t
    }

    #[test]
    fn test_initial_state() {
        let state = PickerState::new();
        assert_eq!(state.phase(), PickerPhase::Closed);
        assert!(!state.is_open());
        assert_eq!(state.selection(), None);
        assert_eq!(state.label("Select category"), "Select category");
    }

    #[test]
    fn test_toggle_open_and_close() {
        let mut state = PickerState::new();
        state.toggle();
        assert_eq!(state.phase(), PickerPhase::TopLevel);
        state.toggle();
        assert_eq!(state.phase(), PickerPhase::Closed);
    }

    #[test]
    fn test_full_selection_path() {
        let t = taxonomy();
        let mut state = PickerState::new();

        state.toggle();
        assert_eq!(state.choose_category(&t, "Electronics"), None);
        assert_eq!(state.phase(), PickerPhase::SubLevel);
        assert_eq!(state.pending_category(), Some("Electronics"));

        let emitted = state.choose_subcategory("Phones");
        assert_eq!(emitted.as_deref(), Some("Electronics > Phones"));
        assert_eq!(state.phase(), PickerPhase::Closed);
        assert_eq!(state.selection(), Some("Electronics > Phones"));
        assert_eq!(state.label("Select category"), "Electronics > Phones");
    }

    #[test]
    fn test_leaf_category_finalizes_immediately() {
        let t = taxonomy();
        let mut state = PickerState::new();

        state.toggle();
        let emitted = state.choose_category(&t, "Gift Cards");
        assert_eq!(emitted.as_deref(), Some("Gift Cards"));
        assert_eq!(state.phase(), PickerPhase::Closed);
        assert_eq!(state.selection(), Some("Gift Cards"));
    }

    #[test]
    fn test_back_discards_pending_only() {
        let t = taxonomy();
        let mut state = PickerState::new();

        // Complete a first selection, then start a second and back out
        state.toggle();
        state.choose_category(&t, "Gift Cards");
        state.toggle();
        state.choose_category(&t, "Electronics");
        state.back();

        assert_eq!(state.phase(), PickerPhase::TopLevel);
        assert_eq!(state.pending_category(), None);
        // Prior label is unchanged
        assert_eq!(state.selection(), Some("Gift Cards"));
    }

    #[test]
    fn test_dismiss_keeps_completed_selection() {
        let t = taxonomy();
        let mut state = PickerState::new();

        state.toggle();
        state.choose_category(&t, "Gift Cards");

        state.toggle();
        state.choose_category(&t, "Electronics");
        state.dismiss();

        assert_eq!(state.phase(), PickerPhase::Closed);
        assert_eq!(state.pending_category(), None);
        assert_eq!(state.selection(), Some("Gift Cards"));
    }

    #[test]
    fn test_no_emission_outside_expected_phase() {
        let t = taxonomy();
        let mut state = PickerState::new();

        // Closed: choosing does nothing
        assert_eq!(state.choose_category(&t, "Electronics"), None);
        assert_eq!(state.choose_subcategory("Phones"), None);
        assert_eq!(state.phase(), PickerPhase::Closed);

        // TopLevel: subcategory choice without a pending category does nothing
        state.toggle();
        assert_eq!(state.choose_subcategory("Phones"), None);
        assert_eq!(state.phase(), PickerPhase::TopLevel);
    }

    #[test]
    fn test_reusable_after_selection() {
        let t = taxonomy();
        let mut state = PickerState::new();

        state.toggle();
        state.choose_category(&t, "Electronics");
        state.choose_subcategory("Phones");

        state.toggle();
        state.choose_category(&t, "Electronics");
        let emitted = state.choose_subcategory("TVs");
        assert_eq!(emitted.as_deref(), Some("Electronics > TVs"));
        assert_eq!(state.selection(), Some("Electronics > TVs"));
    }

    #[test]
    fn test_unknown_category_behaves_as_leaf() {
        // A key missing from the taxonomy has an empty subcategory list
        // and finalizes immediately instead of erroring.
        let t = taxonomy();
        let mut state = PickerState::new();
        state.toggle();
        let emitted = state.choose_category(&t, "Mystery");
        assert_eq!(emitted.as_deref(), Some("Mystery"));
        assert_eq!(state.phase(), PickerPhase::Closed);
    }
}
