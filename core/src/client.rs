//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `RemoteClient` glues the two halves to a `Transport`.

use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Post, PostDraft, PostId};

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self, limit: usize) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts?_limit={limit}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, draft: &PostDraft) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: json_headers(),
            body: Some(encode(draft)?),
        })
    }

    pub fn build_update_post(
        &self,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/posts/{id}", self.base_url),
            headers: json_headers(),
            body: Some(encode(draft)?),
        })
    }

    pub fn build_delete_post(&self, id: PostId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The delete response body is ignored; some servers send `{}`, others
    /// nothing at all.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(draft: &PostDraft) -> Result<String, TransportError> {
    serde_json::to_string(draft).map_err(|e| TransportError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Map non-success status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostsClient {
        PostsClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_posts_carries_limit() {
        let req = client().build_list_posts(8);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts?_limit=8");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_post_produces_json_body() {
        let req = client()
            .build_create_post(&PostDraft::new("B", "y", 2))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "B", "body": "y", "userId": 2}));
    }

    #[test]
    fn build_update_post_targets_id() {
        let req = client()
            .build_update_post(2, &PostDraft::new("Z", "y", 2))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/posts/2");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Z");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_post_has_no_body() {
        let req = client().build_delete_post(1);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/posts/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostsClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_posts(1).path, "http://localhost:3000/posts?_limit=1");
    }

    #[test]
    fn parse_list_posts_keeps_server_order() {
        let posts = client()
            .parse_list_posts(response(
                200,
                r#"[{"id":3,"title":"c","body":"","userId":1},{"id":1,"title":"a","body":"","userId":1}]"#,
            ))
            .unwrap();
        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn parse_create_post_accepts_201() {
        let post = client()
            .parse_create_post(response(201, r#"{"id":101,"title":"B","body":"y","userId":2}"#))
            .unwrap();
        assert_eq!(post.id, 101);
    }

    #[test]
    fn parse_update_post_not_found() {
        let err = client().parse_update_post(response(404, "")).unwrap_err();
        assert_eq!(err, TransportError::NotFound);
    }

    #[test]
    fn parse_create_post_server_error() {
        let err = client()
            .parse_create_post(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_delete_post_ignores_body() {
        assert!(client().parse_delete_post(response(200, "{}")).is_ok());
        assert!(client().parse_delete_post(response(204, "")).is_ok());
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
