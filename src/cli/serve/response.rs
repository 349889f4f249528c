//! HTTP response handling.
//!
//! Requests are answered in two steps: [`route_request`] decides on a
//! [`Reply`] without touching the connection, [`send`] writes it out.

use crate::{
    generator::{Assembler, Document, Emit},
    log,
    utils::{mime::types::PLAIN, path::strip_query},
};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// A response decided for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn plain(status: u16, message: &str, head: bool) -> Self {
        Self {
            status,
            content_type: PLAIN,
            body: if head { Vec::new() } else { message.as_bytes().to_vec() },
        }
    }
}

/// Turns rendered documents into replies.
pub struct ResponseEmitter {
    /// HEAD requests get headers only.
    pub head: bool,
}

impl Emit for ResponseEmitter {
    type Output = Reply;

    fn emit(&self, document: Document) -> Result<Reply> {
        Ok(Reply {
            status: 200,
            content_type: document.content_type,
            body: if self.head { Vec::new() } else { document.body.into_bytes() },
        })
    }
}

/// Decide the reply for `method url`.
///
/// Documents are rendered fresh for every request.
pub fn route_request(method: &Method, url: &str, assembler: &Assembler<'_>) -> Reply {
    let head = *method == Method::Head;
    if !head && *method != Method::Get {
        return Reply::plain(405, "405 Method Not Allowed", false);
    }

    let Some(kind) = assembler.kind_for_route(strip_query(url)) else {
        return Reply::plain(404, "404 Not Found", head);
    };

    match assembler
        .render(kind)
        .and_then(|document| ResponseEmitter { head }.emit(document))
    {
        Ok(reply) => reply,
        Err(e) => {
            log!("serve"; "failed to render {}: {:#}", kind.name(), e);
            Reply::plain(500, "500 Internal Server Error", head)
        }
    }
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send(request, Reply::plain(503, "503 Service Unavailable", false))
}

/// Write a reply to the connection.
pub fn send(request: Request, reply: Reply) -> Result<()> {
    let response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(make_header("Content-Type", reply.content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
