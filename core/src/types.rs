//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names follow the remote wire format (`userId`), so the serde
//! attributes here are the single place where the JSON shape is pinned.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a persisted post.
pub type PostId = u64;

/// Authors a post may be attributed to.
pub const USER_IDS: [u32; 5] = [1, 2, 3, 4, 5];

/// A single post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// Request payload for creating a post, and the full replacement sent when
/// updating one. The server assigns (or keeps) the `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: post.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_user_id_on_the_wire() {
        let post = Post {
            id: 7,
            title: "Hello".to_string(),
            body: "World".to_string(),
            user_id: 3,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 3);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn post_ignores_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{"id":1,"title":"A","body":"x","userId":1,"extra":true}"#,
        )
        .unwrap();
        assert_eq!(post.id, 1);
    }

    #[test]
    fn draft_rejects_missing_user_id() {
        let result: Result<PostDraft, _> = serde_json::from_str(r#"{"title":"A","body":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_from_post_drops_id() {
        let post = Post {
            id: 9,
            title: "T".to_string(),
            body: "B".to_string(),
            user_id: 2,
        };
        let draft = PostDraft::from(&post);
        assert_eq!(draft, PostDraft::new("T", "B", 2));
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
    }
}
