//! tvcontrol-server library crate.
//!
//! An HTTP service that turns remote-control requests from a browser into
//! `adb shell input keyevent` invocations against an Android TV.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over HTTP)
//!         ↕
//! [tvcontrol-server]
//!   ├── domain/           Pure types: request/response bodies, ServerConfig
//!   ├── application/      RemoteService: validation, key sequencing, BridgeRunner seam
//!   └── infrastructure/
//!         ├── http_server/ axum router, handlers, static files
//!         ├── api_error/   ServiceError → HTTP status + JSON
//!         └── adb_runner/  tokio::process runner with timeouts
//!         ↕
//! adb  →  Android TV
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `tvcontrol-core`, and reaches the
//!   outside world only through the `BridgeRunner` trait.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: pure types (no I/O).
pub mod domain;

/// Application layer: remote-control use cases.
pub mod application;

/// Infrastructure layer: process runner and HTTP server.
pub mod infrastructure;
