//! Shared helpers for the runnable demos in `demos/examples/`.
pub mod common;
