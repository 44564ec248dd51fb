//! Library exports for reuse in integration tests and the binary.
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP client configuration.
pub mod http_client;
/// Logging setup.
pub mod logging;
/// Classification service client.
pub mod service;
/// Persisted client settings.
pub mod settings;
