//! Domain layer for tvcontrol-server.
//!
//! Pure types with no I/O: the HTTP request/response bodies and the server
//! configuration.  Anything that spawns a process, opens a socket or reads
//! the environment lives in `infrastructure` (or `main.rs`).

pub mod config;
pub mod messages;

pub use config::ServerConfig;
