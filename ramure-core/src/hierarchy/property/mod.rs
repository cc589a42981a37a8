//! Property-based tests for hierarchy construction.
//!
//! Random connected graphs with varied weight distributions exercise the
//! structural invariants of the canonical binary partition tree, the
//! quasi-flat zone collapse, the saliency round-trip and the horizontal-cut
//! tables.

mod strategies;
