//! # Outside-Click Hook
//!
//! Scoped subscription for dismiss-on-outside-click behavior.
//!
//! The app root forwards every click that reaches it to a small bus of
//! listeners; handlers inside a control's rendered region stop
//! propagation, so only clicks outside the region arrive here. A
//! component subscribes with [`use_outside_click`], which registers on
//! mount and holds a guard whose `Drop` unsubscribes when the component
//! unmounts. Release is unconditional: the guard lives in hook storage,
//! so teardown cannot leave a dangling listener behind.

use dioxus::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;

// ============================================================================
// ClickBus
// ============================================================================

/// Listener callback invoked for each outside click
pub type ClickListener = Rc<dyn Fn()>;

/// Registry of outside-click listeners
///
/// Listener ids are never reused within a bus, so a stale guard can only
/// ever remove its own entry.
#[derive(Default)]
pub struct ClickBus {
    next_id: u64,
    listeners: BTreeMap<u64, ClickListener>,
}

impl ClickBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returning its subscription id
    pub fn subscribe(&mut self, listener: ClickListener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Remove a listener by id; removing twice is harmless
    pub fn unsubscribe(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Snapshot the current listeners
    ///
    /// Callers invoke the snapshot after releasing their borrow of the
    /// bus, since listeners typically write other signals.
    pub fn snapshot(&self) -> Vec<ClickListener> {
        self.listeners.values().cloned().collect()
    }
}

/// Global outside-click bus shared by all subscribed controls
pub static CLICK_BUS: GlobalSignal<ClickBus> = Signal::global(ClickBus::new);

/// Notify every subscribed listener of a click outside their regions
///
/// Wired to the app root's click handler.
pub fn notify_outside_click() {
    let listeners = CLICK_BUS.read().snapshot();
    for listener in listeners {
        listener();
    }
}

// ============================================================================
// OutsideClickGuard
// ============================================================================

/// RAII subscription handle; dropping it unsubscribes from the bus
pub struct OutsideClickGuard {
    id: u64,
    release: Option<Box<dyn FnOnce(u64)>>,
}

impl OutsideClickGuard {
    /// Subscribe a listener to the global bus
    pub fn subscribe(listener: impl Fn() + 'static) -> Self {
        let id = CLICK_BUS.write().subscribe(Rc::new(listener));
        tracing::debug!(id, "outside-click listener registered");
        Self {
            id,
            release: Some(Box::new(|id| CLICK_BUS.write().unsubscribe(id))),
        }
    }

    /// Guard over an arbitrary release action, holding subscription `id`
    fn with_release(id: u64, release: impl FnOnce(u64) + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
            tracing::debug!(id = self.id, "outside-click listener released");
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Subscribe `on_outside` for the lifetime of the calling component
///
/// The subscription is acquired once on mount and released when the
/// component's hook storage is dropped on unmount.
pub fn use_outside_click(on_outside: impl Fn() + 'static) {
    use_hook(|| Rc::new(OutsideClickGuard::subscribe(on_outside)));
}

// ============================================================================
// Tests
// ============================================================================
