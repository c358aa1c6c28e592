//! Legend checkboxes for hiding overlays
//!
//! Each overlay gets a [`LayerToggle`] backed by the multi-valued `hide`
//! fragment parameter: presence of the overlay's token means hidden. User
//! toggles write the parameter through [`FragmentStore::set`] (and therefore
//! never notify the toggle itself); navigation-driven changes come back
//! through the store's subscription.

use crate::fragment::FragmentStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Fragment parameter listing hidden overlay tokens.
pub const HIDE_PARAM: &str = "hide";

/// Checkbox state for one overlay, plus the visibility callback the host
/// uses to attach/detach the overlay's layer group.
pub struct LayerToggle {
    token: String,
    checked: bool,
    on_change: Box<dyn FnMut(bool)>,
}

impl LayerToggle {
    /// Creates the toggle, subscribes it to `hide` changes, and applies the
    /// currently stored value once (firing `on_change`).
    pub fn bind<F>(store: &mut FragmentStore, token: &str, on_change: F) -> Rc<RefCell<LayerToggle>>
    where
        F: FnMut(bool) + 'static,
    {
        let toggle = Rc::new(RefCell::new(LayerToggle {
            token: token.to_string(),
            checked: true,
            on_change: Box::new(on_change),
        }));

        let subscribed = Rc::clone(&toggle);
        store.on(HIDE_PARAM, move |_key, values| {
            subscribed.borrow_mut().apply_hidden_tokens(values);
        });

        let current = store.get_all(HIDE_PARAM).to_vec();
        toggle.borrow_mut().apply_hidden_tokens(&current);
        toggle
    }

    /// Whether the overlay is currently shown.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Applies a user click on the checkbox: rewrites the `hide` parameter
    /// and fires the visibility callback. Unchecking an already-hidden
    /// overlay is a no-op.
    pub fn set_checked(&mut self, store: &mut FragmentStore, checked: bool) {
        let mut hidden = store.get_all(HIDE_PARAM).to_vec();
        if checked {
            hidden.retain(|token| token != &self.token);
        } else if !hidden.iter().any(|token| token == &self.token) {
            hidden.push(self.token.clone());
        } else {
            return;
        }
        store.set(HIDE_PARAM, &hidden);
        self.checked = checked;
        (self.on_change)(checked);
    }

    fn apply_hidden_tokens(&mut self, values: &[String]) {
        self.checked = !values.iter().any(|token| token == &self.token);
        (self.on_change)(self.checked);
    }
}
