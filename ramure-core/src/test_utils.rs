//! Shared helpers for unit and property tests.

use proptest::prelude::ProptestConfig;

/// Proptest configuration for suite-level property tests.
pub(crate) fn suite_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
