//! Test assertions for node actions.

use crate::context::SharedContext;
use crate::node::{Action, ProfilePropertyConfig, SingleOutcome};
use std::collections::HashSet;

/// Asserts that the action follows the single outcome and carries a
/// replacement shared state, and returns that state.
pub fn assert_single_outcome(action: &Action) -> &SharedContext {
    assert_eq!(
        action.outcome,
        SingleOutcome::ID,
        "Expected outcome '{}', got '{}'",
        SingleOutcome::ID,
        action.outcome
    );
    action
        .shared_state
        .as_ref()
        .unwrap_or_else(|| panic!("Expected the action to replace the shared state"))
}

/// Asserts that the state holds `expected` as a string at `key`.
pub fn assert_state_value(state: &SharedContext, key: &str, expected: &str) {
    assert_eq!(
        state.get_str(key),
        Some(expected),
        "Expected '{}' at key '{}', state was {}",
        expected,
        key,
        state.to_value()
    );
}

/// Asserts that the state has no entry at `key`.
pub fn assert_state_lacks(state: &SharedContext, key: &str) {
    assert!(
        !state.contains_key(key),
        "Expected no entry at key '{}', found {:?}",
        key,
        state.get(key)
    );
}

/// Asserts that every key outside the configuration's destination keys is
/// identical in `input` and `output`.
pub fn assert_unmapped_keys_preserved(
    input: &SharedContext,
    output: &SharedContext,
    config: &ProfilePropertyConfig,
) {
    let destinations: HashSet<&str> = config.destinations().collect();

    for (key, value) in input.iter().filter(|(k, _)| !destinations.contains(k)) {
        assert_eq!(
            output.get(key),
            Some(value),
            "Unmapped key '{key}' changed"
        );
    }
    for key in output.keys().filter(|k| !destinations.contains(k)) {
        assert!(input.contains_key(key), "Unmapped key '{key}' was added");
    }
}
