//! Server lifecycle management.

use crate::{core::register_server, log};
use anyhow::{Result, anyhow};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
///
/// Returns the address actually bound, which differs from the request when
/// `base_port` is 0 or busy.
pub fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                let bound = server.server_addr().to_ip().unwrap_or(addr);
                return Ok((server, bound));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// Register server for graceful shutdown.
///
/// Ctrl+C then unblocks the request loop instead of killing the process.
pub fn register_server_for_shutdown(server: Arc<Server>) {
    register_server(server);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, TcpListener};

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    #[test]
    fn test_bind_ephemeral_port() {
        let (_server, addr) = bind_with_retry(LOCALHOST, 0).unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_skips_busy_port() {
        let busy = TcpListener::bind((LOCALHOST, 0)).unwrap();
        let port = busy.local_addr().unwrap().port();

        match bind_with_retry(LOCALHOST, port) {
            Ok((_server, addr)) => assert_ne!(addr.port(), port),
            // Neighbouring ports may be taken too on a crowded host
            Err(e) => assert!(e.to_string().contains("Failed to bind")),
        }
    }
}
