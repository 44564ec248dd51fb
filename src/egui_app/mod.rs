//! Controller, state, and renderer for the TruthLens UI.

/// Event handling and state transitions.
pub mod controller;
/// Plain data structs consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// State-to-display conversions.
pub mod view_model;
