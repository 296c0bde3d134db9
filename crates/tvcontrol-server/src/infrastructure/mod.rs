//! Infrastructure layer for tvcontrol-server.
//!
//! The infrastructure layer handles all I/O: spawning the bridge executable
//! and serving HTTP.
//!
//! # Responsibilities
//!
//! - Spawning `adb` with a timeout and capturing its output
//! - Binding the HTTP listener and routing requests
//! - Mapping service errors to HTTP status codes and JSON bodies
//! - Serving the static browser remote
//! - Handling the graceful shutdown signal
//!
//! # What does NOT belong here?
//!
//! - Key-sequence expansion and validation (that is the application layer)
//! - Request/response type definitions (that is the domain layer)
//! - Configuration parsing (that is done in `main.rs`)

pub mod adb_runner;
pub mod api_error;
pub mod http_server;
pub mod mock_runner;

pub use adb_runner::AdbRunner;
pub use api_error::ApiError;
pub use http_server::{build_router, run_server, AppState};
pub use mock_runner::MockBridgeRunner;
