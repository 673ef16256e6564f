//! Layer merging.

use factory_yaml::{Mapping, Node};
use indexmap::map::Entry;

/// Merge `overlay` on top of `base`.
///
/// When both sides hold a mapping under the same key the two are merged
/// recursively. Any other collision, list against list included, is won
/// outright by the overlay: lists are replaced, never concatenated. Keys keep
/// their position from `base`; keys new in `overlay` are appended.
pub fn deep_merge(base: Mapping, overlay: Mapping) -> Mapping {
    let mut result = base;
    for (key, value) in overlay {
        match result.entry(key) {
            Entry::Occupied(mut slot) => {
                let merged = match (slot.get_mut(), value) {
                    (Node::Mapping(existing), Node::Mapping(incoming)) => {
                        Node::Mapping(deep_merge(std::mem::take(existing), incoming))
                    }
                    (_, value) => value,
                };
                slot.insert(merged);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    result
}
