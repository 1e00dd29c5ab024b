// Theme library - exposes the theme resolver and its config for the front-end and tests

// Core types and config are always available (needed for schema generation)
pub mod config;
pub mod theme;

// WASM browser build modules
#[cfg(feature = "wasm")]
pub mod wasm;
