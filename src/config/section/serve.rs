//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 5277                 # HTTP port number
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number. Busy ports are skipped upwards.
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
        }
    }
}
