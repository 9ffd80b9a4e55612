//! Cross-crate tests for the meshaddr workspace.

mod address;
