//! Remote post source over HTTP.

use super::{Post, PostSource, PostsPage, SourceError, envelope};
use crate::{config::SiteConfig, debug, log, utils::path::join_url};
use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Listing endpoint, relative to the API base.
const LISTING_PATH: &str = "/home/all-posts";

/// Fetches posts from the blog API.
///
/// Listing failures (transport errors, non-success status) are logged and
/// read as an empty last page. Malformed bodies are errors.
pub struct HttpPostSource {
    client: Client,
    api_url: String,
    detail_url: String,
}

impl HttpPostSource {
    pub fn new(config: &SiteConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.source.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            api_url: config.source.api_url.clone(),
            detail_url: config.source.detail_base(&config.site.url),
        })
    }

    pub fn listing_url(&self, page: u32, limit: u32) -> String {
        format!(
            "{}?page={page}&limit={limit}",
            join_url(&self.api_url, LISTING_PATH)
        )
    }

    pub fn post_url(&self, id: &str) -> String {
        join_url(&self.detail_url, id)
    }

    fn get(&self, url: &str) -> Result<Response, SourceError> {
        debug!("source"; "GET {}", url);
        self.client
            .get(url)
            .send()
            .map_err(|source| SourceError::Transport {
                url: url.to_string(),
                source,
            })
    }

    fn read_json(response: Response, url: &str) -> Result<Value, SourceError> {
        let body = response.text().map_err(|source| SourceError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| SourceError::Json {
            origin: url.to_string(),
            source,
        })
    }
}

impl PostSource for HttpPostSource {
    fn fetch_posts_page(&self, page: u32, limit: u32) -> Result<PostsPage, SourceError> {
        let url = self.listing_url(page, limit);

        let response = match self.get(&url) {
            Ok(response) => response,
            Err(err) => {
                log!("source"; "{}", err.detail());
                return Ok(PostsPage::empty());
            }
        };

        let status = response.status();
        if !status.is_success() {
            log!("source"; "{} responded with HTTP {}", url, status.as_u16());
            return Ok(PostsPage::empty());
        }

        let body = match Self::read_json(response, &url) {
            Err(SourceError::Transport { source, .. }) => {
                log!("source"; "failed to read {}: {}", url, source);
                return Ok(PostsPage::empty());
            }
            other => other?,
        };

        let page = envelope::decode_page(&body, page);
        debug!("source"; "{} posts, next page: {}", page.posts.len(), page.has_next_page);
        Ok(page)
    }

    fn fetch_post(&self, id: &str) -> Result<Option<Post>, SourceError> {
        let url = self.post_url(id);
        let response = self.get(&url)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = Self::read_json(response, &url)?;
        Ok(envelope::decode_single(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tiny_http::{Header, Response as HttpResponse, Server, StatusCode as HttpStatus};

    /// Serve canned `(status, body)` responses, one per request, in order.
    /// Returns the base URL and a handle yielding the requested URLs.
    fn serve(replies: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in replies {
                let request = server.recv().unwrap();
                seen.push(request.url().to_string());
                let header = Header::from_bytes("Content-Type", "application/json").unwrap();
                let response = HttpResponse::from_string(body)
                    .with_status_code(HttpStatus(status))
                    .with_header(header);
                request.respond(response).unwrap();
            }
            seen
        });

        (format!("http://{addr}"), handle)
    }

    fn source_for(api_url: &str) -> HttpPostSource {
        let mut config = SiteConfig::default();
        config.source.api_url = format!("{api_url}/api");
        config.source.detail_url = Some(format!("{api_url}/api/posts"));
        config.source.timeout_secs = Some(5);
        HttpPostSource::new(&config).unwrap()
    }

    #[test]
    fn test_listing_url() {
        let source = source_for("http://localhost:8000");
        assert_eq!(
            source.listing_url(2, 100),
            "http://localhost:8000/api/home/all-posts?page=2&limit=100"
        );
        assert_eq!(source.post_url("42"), "http://localhost:8000/api/posts/42");
    }

    #[test]
    fn test_detail_url_defaults_to_site() {
        let mut config = SiteConfig::default();
        config.site.url = "https://blog.example.com".into();
        let source = HttpPostSource::new(&config).unwrap();
        assert_eq!(source.post_url("7"), "https://blog.example.com/api/posts/7");
    }

    #[test]
    fn test_fetch_page() {
        let (base, handle) = serve(vec![(
            200,
            r#"{"posts": [{"id": 1, "title": "One"}], "pagination": {"hasNextPage": true}}"#,
        )]);
        let page = source_for(&base).fetch_posts_page(1, 100).unwrap();

        assert_eq!(page.posts.len(), 1);
        assert!(page.has_next_page);
        assert_eq!(handle.join().unwrap(), vec!["/api/home/all-posts?page=1&limit=100"]);
    }

    #[test]
    fn test_error_status_is_empty_page() {
        let (base, handle) = serve(vec![(500, r#"{"error": "boom"}"#)]);
        let page = source_for(&base).fetch_posts_page(1, 100).unwrap();
        assert_eq!(page, PostsPage::empty());
        handle.join().unwrap();
    }

    #[test]
    fn test_malformed_json_is_error() {
        let (base, handle) = serve(vec![(200, "<html>oops</html>")]);
        let result = source_for(&base).fetch_posts_page(1, 100);
        assert!(matches!(result, Err(SourceError::Json { .. })));
        handle.join().unwrap();
    }

    #[test]
    fn test_unreachable_is_empty_page() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let page = source_for(&format!("http://127.0.0.1:{port}"))
            .fetch_posts_page(1, 100)
            .unwrap();
        assert_eq!(page, PostsPage::empty());
    }

    #[test]
    fn test_fetch_post() {
        let (base, handle) = serve(vec![
            (200, r#"{"post": {"id": "42", "title": "Answer"}}"#),
            (404, r#"{"error": "not found"}"#),
            (503, "unavailable"),
        ]);
        let source = source_for(&base);

        let post = source.fetch_post("42").unwrap().unwrap();
        assert_eq!(post.title.as_deref(), Some("Answer"));
        assert_eq!(source.fetch_post("missing").unwrap(), None);
        assert!(matches!(
            source.fetch_post("43"),
            Err(SourceError::Status { status: 503, .. })
        ));

        assert_eq!(
            handle.join().unwrap(),
            vec!["/api/posts/42", "/api/posts/missing", "/api/posts/43"]
        );
    }
}
