//! Change-notifying key/value view over the URL fragment
//!
//! [`FragmentStore`] decouples the features that read and write view state
//! (bounds, hidden layers) from raw fragment string manipulation. Writers use
//! [`set`](FragmentStore::set), which rewrites the fragment through the
//! injected [`FragmentSink`] without notifying anyone; externally originated
//! changes (navigation, back/forward) enter through
//! [`handle_change`](FragmentStore::handle_change) and are diffed per key
//! against the previous snapshot, so subscribers only ever see actual value
//! changes.

pub mod codec;
pub mod viewbounds;

use crate::prelude::HashMap;
use codec::ParamMap;

/// Fragment write seam to the platform.
///
/// `replace` rewrites the fragment text in place and must not create a new
/// history entry (the browser equivalent is `location.replace`).
pub trait FragmentSink {
    fn replace(&mut self, fragment: &str);
}

/// Sink that discards writes; useful for tests and headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FragmentSink for NullSink {
    fn replace(&mut self, _fragment: &str) {}
}

type Subscriber = Box<dyn FnMut(&str, &[String])>;

/// Multi-valued fragment parameter store with per-key change notification.
pub struct FragmentStore {
    current: ParamMap,
    subscribers: HashMap<String, Vec<Subscriber>>,
    sink: Box<dyn FragmentSink>,
}

impl FragmentStore {
    /// Parses the initial fragment text (without the leading `#`).
    pub fn new(initial_fragment: &str, sink: Box<dyn FragmentSink>) -> Self {
        Self {
            current: ParamMap::parse(initial_fragment),
            subscribers: HashMap::default(),
            sink,
        }
    }

    /// Current values for `key`, empty if absent. Never fails.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.current.get_all(key)
    }

    /// Sets parameter `key` without triggering callbacks.
    ///
    /// An empty `values` removes the key. The snapshot is committed before
    /// the sink write, so when the platform echoes the change back into
    /// [`handle_change`](Self::handle_change) the diff is empty and no
    /// subscriber fires; writers are never notified of their own writes.
    pub fn set(&mut self, key: &str, values: &[String]) {
        if values.is_empty() {
            self.current.remove(key);
        } else {
            self.current.set(key, values.to_vec());
        }
        self.sink.replace(&self.current.serialize());
    }

    /// Calls `callback` whenever an externally detected change for `key`
    /// occurs. Callbacks run synchronously in registration order and receive
    /// the key's complete new value sequence (empty when the key was
    /// removed). Registration does not invoke the callback; callers that
    /// need current-state initialization read [`get_all`](Self::get_all) and
    /// fire their handler themselves.
    pub fn on<F>(&mut self, key: &str, callback: F)
    where
        F: FnMut(&str, &[String]) + 'static,
    {
        self.subscribers
            .entry(key.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Accepts an externally originated fragment change.
    ///
    /// Diffs the new text against the committed snapshot: keys that vanished
    /// are notified with an empty sequence, keys whose value sequence differs
    /// in length or any positional value are notified with the new sequence,
    /// and equal sequences stay silent even when re-parsed into a fresh
    /// collection. The snapshot is committed afterwards.
    pub fn handle_change(&mut self, fragment: &str) {
        let next = ParamMap::parse(fragment);

        let mut changed: Vec<(String, Vec<String>)> = Vec::new();
        for key in self.current.keys() {
            if !next.contains(key) {
                changed.push((key.to_string(), Vec::new()));
            }
        }
        for key in next.keys() {
            if self.current.get_all(key) != next.get_all(key) {
                changed.push((key.to_string(), next.get_all(key).to_vec()));
            }
        }

        for (key, values) in &changed {
            if let Some(callbacks) = self.subscribers.get_mut(key.as_str()) {
                for callback in callbacks.iter_mut() {
                    callback(key, values);
                }
            }
        }

        self.current = next;
    }

    /// Serialized form of the committed snapshot.
    pub fn fragment(&self) -> String {
        self.current.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl FragmentSink for RecordingSink {
        fn replace(&mut self, fragment: &str) {
            self.writes.borrow_mut().push(fragment.to_string());
        }
    }

    fn recording_store(initial: &str) -> (FragmentStore, Rc<RefCell<Vec<String>>>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink {
            writes: Rc::clone(&writes),
        };
        (FragmentStore::new(initial, Box::new(sink)), writes)
    }

    fn record_values(log: &Rc<RefCell<Vec<Vec<String>>>>) -> impl FnMut(&str, &[String]) {
        let log = Rc::clone(log);
        move |_key, values| log.borrow_mut().push(values.to_vec())
    }

    #[test]
    fn test_get_all_on_initial_fragment() {
        let (store, _) = recording_store("hide=dvb&hide=nextbike");
        assert_eq!(store.get_all("hide"), ["dvb", "nextbike"]);
        assert_eq!(store.get_all("bounds"), [] as [&str; 0]);
    }

    #[test]
    fn test_set_round_trip() {
        let (mut store, writes) = recording_store("");
        store.set("hide", &["dvb".to_string()]);

        assert_eq!(store.get_all("hide"), ["dvb"]);
        assert_eq!(*writes.borrow(), vec!["hide=dvb".to_string()]);
    }

    #[test]
    fn test_set_empty_removes_key() {
        let (mut store, writes) = recording_store("hide=dvb");
        store.set("hide", &[]);

        assert_eq!(store.get_all("hide"), [] as [&str; 0]);
        assert_eq!(writes.borrow().last().unwrap(), "");
    }

    #[test]
    fn test_set_does_not_notify_subscribers() {
        let (mut store, _) = recording_store("bounds=1,2;3,4");
        let hide_log = Rc::new(RefCell::new(Vec::new()));
        let bounds_log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&hide_log));
        store.on("bounds", record_values(&bounds_log));

        store.set("hide", &["dvb".to_string()]);

        assert!(hide_log.borrow().is_empty());
        assert!(bounds_log.borrow().is_empty());
    }

    #[test]
    fn test_set_rewrites_fragment_with_valid_encoding() {
        let (mut store, writes) = recording_store("bounds=1,2;3,4");
        store.set("hide", &["dvb".to_string()]);

        assert_eq!(
            writes.borrow().last().unwrap(),
            "bounds=1%2C2%3B3%2C4&hide=dvb"
        );
        assert_eq!(store.get_all("hide"), ["dvb"]);
        assert_eq!(store.get_all("bounds"), ["1,2;3,4"]);
    }

    #[test]
    fn test_echo_of_own_write_is_absorbed() {
        let (mut store, writes) = recording_store("");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        store.set("hide", &["dvb".to_string()]);
        // platform fires its change signal for the store's own write
        let echoed = writes.borrow().last().unwrap().clone();
        store.handle_change(&echoed);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_added_value_notifies_once_with_complete_sequence() {
        let (mut store, _) = recording_store("hide=dvb");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        store.handle_change("hide=dvb&hide=nextbike");

        assert_eq!(*log.borrow(), vec![vec!["dvb".to_string(), "nextbike".to_string()]]);
    }

    #[test]
    fn test_removed_key_notifies_with_empty_sequence() {
        let (mut store, _) = recording_store("hide=dvb&bounds=1,2;3,4");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        store.handle_change("bounds=1,2;3,4");

        assert_eq!(*log.borrow(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_equal_sequences_stay_silent() {
        let (mut store, _) = recording_store("hide=dvb&hide=nextbike");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        // same values, freshly parsed collection, other key changed
        store.handle_change("hide=dvb&hide=nextbike&bounds=5,6;7,8");

        assert!(log.borrow().is_empty());
        assert_eq!(store.get_all("bounds"), ["5,6;7,8"]);
    }

    #[test]
    fn test_positional_change_notifies() {
        let (mut store, _) = recording_store("hide=dvb&hide=nextbike");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        store.handle_change("hide=nextbike&hide=dvb");

        assert_eq!(
            *log.borrow(),
            vec![vec!["nextbike".to_string(), "dvb".to_string()]]
        );
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let (mut store, _) = recording_store("");
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            store.on("hide", move |_key, _values| order.borrow_mut().push(tag));
        }
        store.handle_change("hide=dvb");

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_keys_absent_from_both_snapshots_never_notify() {
        let (mut store, _) = recording_store("bounds=1,2;3,4");
        let log = Rc::new(RefCell::new(Vec::new()));
        store.on("hide", record_values(&log));

        store.handle_change("bounds=5,6;7,8");

        assert!(log.borrow().is_empty());
    }
}
