//! TVControl server entry point.
//!
//! Serves a JSON API (and optionally the browser remote) that drives an
//! Android TV through the `adb` command-line tool.  Every remote button
//! press becomes one or more `adb shell input keyevent` invocations.
//!
//! # Usage
//!
//! ```text
//! tvcontrol-server [OPTIONS]
//!
//! Options:
//!   --port               <PORT>  HTTP listener port [default: 5000]
//!   --bind               <IP>    HTTP listener address [default: 0.0.0.0]
//!   --adb-path           <PATH>  adb executable [default: adb]
//!   --command-timeout-ms <MS>    Per-command timeout [default: 5000]
//!   --connect-timeout-ms <MS>    Timeout for `adb connect` [default: 10000]
//!   --key-delay-ms       <MS>    Pause between keys of an action [default: 120]
//!   --channel-delay-ms   <MS>    Pause between channel digits [default: 90]
//!   --static-dir         <DIR>   Serve the browser remote from DIR
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable                    | Default   | Description                  |
//! |-----------------------------|-----------|------------------------------|
//! | `PORT`                      | `5000`    | HTTP listener port           |
//! | `TVCONTROL_BIND`            | `0.0.0.0` | HTTP listener address        |
//! | `ADB_PATH`                  | `adb`     | adb executable               |
//! | `ADB_COMMAND_TIMEOUT`       | `5000`    | Per-command timeout (ms)     |
//! | `TVCONTROL_CONNECT_TIMEOUT` | `10000`   | `adb connect` timeout (ms)   |
//! | `TVCONTROL_KEY_DELAY`       | `120`     | Inter-key delay (ms)         |
//! | `TVCONTROL_CHANNEL_DELAY`   | `90`      | Inter-digit delay (ms)       |
//! | `TVCONTROL_STATIC_DIR`      | unset     | Browser remote directory     |

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tvcontrol_server::domain::ServerConfig;
use tvcontrol_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Browser remote control for Android TV over adb.
#[derive(Debug, Parser)]
#[command(
    name = "tvcontrol-server",
    about = "HTTP remote control for Android TV devices reachable through adb",
    version
)]
struct Cli {
    /// TCP port for the HTTP server to listen on.
    #[arg(long, default_value_t = 5000, env = "PORT")]
    port: u16,

    /// IP address to bind the HTTP server to.
    ///
    /// Use `0.0.0.0` to accept connections from the LAN, or `127.0.0.1` to
    /// accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "TVCONTROL_BIND")]
    bind: String,

    /// Path to the adb executable (a bare name is looked up on PATH).
    #[arg(long, default_value = "adb", env = "ADB_PATH")]
    adb_path: PathBuf,

    /// Timeout for each adb invocation, in milliseconds.
    #[arg(long, default_value_t = 5000, env = "ADB_COMMAND_TIMEOUT")]
    command_timeout_ms: u64,

    /// Timeout for `adb connect`, in milliseconds.
    #[arg(long, default_value_t = 10_000, env = "TVCONTROL_CONNECT_TIMEOUT")]
    connect_timeout_ms: u64,

    /// Pause between key events of a multi-key action, in milliseconds.
    #[arg(long, default_value_t = 120, env = "TVCONTROL_KEY_DELAY")]
    key_delay_ms: u64,

    /// Pause between digits when entering a channel, in milliseconds.
    #[arg(long, default_value_t = 90, env = "TVCONTROL_CHANNEL_DELAY")]
    channel_delay_ms: u64,

    /// Directory containing the browser remote (`index.html`, `app.js`).
    ///
    /// When absent only the JSON API is served.
    #[arg(long, env = "TVCONTROL_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

impl Cli {
    /// Converts parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not an IP address or
    /// `--command-timeout-ms` is zero.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: '{}'", self.bind))?;

        if self.command_timeout_ms == 0 {
            anyhow::bail!("--command-timeout-ms must be greater than zero");
        }

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.port),
            adb_path: self.adb_path,
            command_timeout: Duration::from_millis(self.command_timeout_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            key_delay: Duration::from_millis(self.key_delay_ms),
            channel_digit_delay: Duration::from_millis(self.channel_delay_ms),
            static_dir: self.static_dir,
        })
    }
}

/// Resolves when Ctrl+C is received.
///
/// If the signal handler cannot be installed the server keeps running and
/// must be stopped externally.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            error!("failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!(
        bind = %config.bind_addr,
        adb = %config.adb_path.display(),
        command_timeout_ms = config.command_timeout.as_millis() as u64,
        static_dir = ?config.static_dir,
        "TVControl server starting"
    );

    run_server(config, shutdown_signal()).await?;

    info!("TVControl server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
