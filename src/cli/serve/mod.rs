//! Development server for the generated documents.
//!
//! Serves the sitemap, feed and robots.txt at their configured paths and
//! renders them again for every request. Requests are handled one at a
//! time on the calling thread.

mod lifecycle;
mod response;

use response::route_request;

use crate::{
    config::SiteConfig,
    core::is_shutdown,
    debug,
    generator::{Assembler, DocumentKind},
    log,
    source::{self, PostSource},
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Handle used to stop the request loop from another thread.
    #[cfg(test)]
    pub fn handle(&self) -> Arc<Server> {
        Arc::clone(&self.server)
    }

    /// Start the request loop (blocking until the server is unblocked).
    pub fn run(self, config: &SiteConfig, source: &dyn PostSource) -> Result<()> {
        for request in self.server.incoming_requests() {
            if let Err(e) = handle_request(request, config, source) {
                log!("serve"; "request error: {e}");
            }
        }
        Ok(())
    }
}

/// Bind, then serve until Ctrl+C.
pub fn serve(config: &SiteConfig) -> Result<()> {
    let source = source::open(config).context("Failed to open post source")?;
    let bound = bind_server(config)?;

    let probe = Assembler::new(config, source.as_ref());
    for kind in DocumentKind::ALL.into_iter().filter(|&k| probe.is_enabled(k)) {
        debug!("serve"; "http://{}/{}", bound.addr(), probe.path_of(kind).display());
    }

    bound.run(config, source.as_ref())
}

fn handle_request(request: Request, config: &SiteConfig, source: &dyn PostSource) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    let assembler = Assembler::new(config, source);
    let reply = route_request(request.method(), request.url(), &assembler);
    debug!("serve"; "{} {} {}", request.method(), request.url(), reply.status);
    response::send(request, reply)
}
