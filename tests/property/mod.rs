//! Property-based tests

#[cfg(feature = "ssr")]
mod entry_proptest;
