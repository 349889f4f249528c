//! Decoding of post listing responses.
//!
//! Backends wrap their post lists in different envelopes, so every shape
//! below is accepted:
//!
//! ```text
//! [ {...}, ... ]                                  top-level array
//! { "posts" | "data" | "items" | "results": [...] }
//! { "data": { "posts" | "items": [...] } }
//! ```
//!
//! Whether another page exists is read from the first container that says
//! anything about it, in this order: `pagination`, `meta`, `pageInfo`, the
//! top level, `data`. Inside a container an explicit flag wins over a page
//! count. Without any metadata there is no next page.

use super::{Comment, Post, PostsPage};
use serde_json::{Map, Value};

const LIST_KEYS: &[&str] = &["posts", "data", "items", "results"];
const NESTED_LIST_KEYS: &[&str] = &["posts", "items"];

const PAGINATION_CONTAINERS: &[&str] = &["pagination", "meta", "pageInfo"];
const NEXT_FLAGS: &[&str] = &["hasNextPage", "has_next_page", "hasNext", "hasMore"];
const TOTAL_PAGES: &[&str] = &["totalPages", "total_pages", "pages", "pageCount"];

/// Envelopes wrapping a single post.
const POST_KEYS: &[&str] = &["post", "data"];

/// Decode one listing response fetched for `page`.
pub fn decode_page(body: &Value, page: u32) -> PostsPage {
    PostsPage {
        posts: decode_posts(body),
        has_next_page: has_next_page(body, page),
    }
}

/// Extract the post list of a response. Entries without an id are dropped.
pub fn decode_posts(body: &Value) -> Vec<Post> {
    post_list(body)
        .map(|list| list.iter().filter_map(decode_post).collect())
        .unwrap_or_default()
}

/// Extract a single post, bare or wrapped under `post` / `data`.
pub fn decode_single(body: &Value) -> Option<Post> {
    POST_KEYS
        .iter()
        .filter_map(|key| body.get(key))
        .find(|v| v.is_object())
        .map_or_else(|| decode_post(body), decode_post)
}

/// Decode one post object.
pub fn decode_post(value: &Value) -> Option<Post> {
    let obj = value.as_object()?;
    let id = first_id(obj, &["id", "_id"])?;

    Some(Post {
        id,
        title: first_string(obj, &["title"]),
        published: first_string(obj, &["publishedAt", "published_at"])
            .or_else(|| first_string(obj, &["createdAt", "created_at"])),
        summary: first_string(obj, &["excerpt", "description", "summary"]),
        author: obj.get("author").and_then(person_name),
        content: first_string(obj, &["content", "body"]),
        comments: obj
            .get("comments")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(decode_comment).collect())
            .unwrap_or_default(),
    })
}

fn decode_comment(value: &Value) -> Option<Comment> {
    let obj = value.as_object()?;
    Some(Comment {
        id: first_id(obj, &["id", "_id"]),
        author: obj.get("author").and_then(person_name),
        body: first_string(obj, &["content", "body", "text"]),
        published: first_string(obj, &["createdAt", "created_at", "publishedAt"]),
    })
}

fn post_list(body: &Value) -> Option<&Vec<Value>> {
    if let Some(list) = body.as_array() {
        return Some(list);
    }

    LIST_KEYS
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_array))
        .or_else(|| {
            let data = body.get("data")?;
            NESTED_LIST_KEYS
                .iter()
                .find_map(|key| data.get(key).and_then(Value::as_array))
        })
}

fn has_next_page(body: &Value, page: u32) -> bool {
    PAGINATION_CONTAINERS
        .iter()
        .map(|key| body.get(key))
        .chain([Some(body), body.get("data")])
        .flatten()
        .filter_map(Value::as_object)
        .find_map(|container| next_from(container, page))
        .unwrap_or(false)
}

/// What a single container says about the next page, if anything.
fn next_from(container: &Map<String, Value>, page: u32) -> Option<bool> {
    if let Some(flag) = NEXT_FLAGS
        .iter()
        .find_map(|key| container.get(*key).and_then(Value::as_bool))
    {
        return Some(flag);
    }

    TOTAL_PAGES
        .iter()
        .find_map(|key| container.get(*key).and_then(as_count))
        .map(|total| u64::from(page) < total)
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ids may be strings or numbers.
fn first_id(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| {
            obj.get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
        .map(str::to_owned)
}

/// Authors come as plain names or as user objects.
fn person_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(obj) => first_string(obj, &["name", "displayName", "username"]),
        _ => None,
    }
}
