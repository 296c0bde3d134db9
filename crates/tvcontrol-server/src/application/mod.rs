//! Application layer for tvcontrol-server.
//!
//! The application layer orchestrates the business logic: it knows *what* to
//! run against the bridge tool, but delegates *how* to run it to a
//! [`BridgeRunner`] supplied by the infrastructure layer.
//!
//! # Responsibilities
//!
//! - Validating request fields before anything is spawned
//! - Expanding actions and channel numbers into key-event sequences
//! - Sequencing key events with the configured delays
//! - Defining the `BridgeError` / `ServiceError` types
//!
//! # What does NOT belong here?
//!
//! - Spawning processes or enforcing timeouts (infrastructure)
//! - HTTP status codes and JSON bodies (infrastructure / domain)

pub mod bridge;
pub mod remote_service;

pub use bridge::{BridgeError, BridgeRunner, CommandOutput, RunOptions};
pub use remote_service::{ConnectOutcome, RemoteService, ServiceError, ServiceTiming};
