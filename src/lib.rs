//! Library entry for intl-editor exposing catalog logic to the binary and integration tests.

pub mod catalog;
pub mod settings;
