//! Host object-model probe.
//!
//! `serde_json` keeps object fields in alphabetical order unless its
//! `preserve_order` feature is enabled somewhere in the build graph. Display
//! metadata still lists fields in the order supplied, but consumers that walk
//! the record's own field map will see them reordered. That is a build-time
//! condition, so it is probed once per process and reported as an advisory
//! warning, never as an error.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

static INSERTION_ORDER_KEPT: Lazy<bool> = Lazy::new(|| {
    let mut probe = Map::new();
    probe.insert("b".to_string(), Value::Null);
    probe.insert("a".to_string(), Value::Null);
    probe.keys().next().is_some_and(|first| first == "b")
});

/// Whether record field maps keep insertion order in this build.
pub(crate) fn field_order_is_stable() -> bool {
    *INSERTION_ORDER_KEPT
}

/// Emit the advisory once for the current attachment, then proceed.
pub(crate) fn warn_if_order_unstable() {
    if !field_order_is_stable() {
        tracing::warn!(
            "record field maps in this build reorder fields alphabetically; \
             enable the `preserve-order` feature if bundle consumers walk \
             record fields in insertion order"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    #[test]
    fn probe_matches_live_map_behavior() {
        let mut map = Map::new();
        map.insert("second".to_string(), Value::Null);
        map.insert("first".to_string(), Value::Null);

        let kept = map.keys().next().unwrap() == "second";
        assert_eq!(field_order_is_stable(), kept);
    }
}
