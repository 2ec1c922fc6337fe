//! Testing utilities for tree nodes.
//!
//! This module provides:
//! - A scripted identity resolver
//! - Attempt and identity store fixtures
//! - Assertions for node actions

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_single_outcome, assert_state_lacks, assert_state_value, assert_unmapped_keys_preserved,
};
pub use fixtures::{TestAttempt, TestProfile};
pub use mocks::ScriptedResolver;
