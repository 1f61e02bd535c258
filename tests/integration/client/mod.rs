//! Form client integration tests
