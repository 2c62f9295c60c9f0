//! Export linked Blender collection instances to JSON.

/// Scene model, axis remap, and JSON export of linked collection instances.
pub mod export;
