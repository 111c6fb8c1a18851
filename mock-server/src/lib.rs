use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Default)]
pub struct Posts {
    rows: BTreeMap<u64, Post>,
    next_id: u64,
}

impl Posts {
    fn insert(&mut self, mut post: Post) -> Post {
        if post.id == 0 {
            post.id = self.next_id + 1;
        }
        self.next_id = self.next_id.max(post.id);
        self.rows.insert(post.id, post.clone());
        post
    }
}

pub type Db = Arc<RwLock<Posts>>;

pub fn app() -> Router {
    app_with_posts(Vec::new())
}

/// Router whose store starts with `posts`. Posts with `id == 0` get the next
/// free id.
pub fn app_with_posts(posts: Vec<Post>) -> Router {
    let mut table = Posts::default();
    for post in posts {
        table.insert(post);
    }
    let db: Db = Arc::new(RwLock::new(table));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", put(update_post).delete(delete_post))
        .with_state(db)
}

/// `count` placeholder posts, ids `1..=count`, authors cycling through 1-5.
pub fn sample_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            title: format!("Post {id}"),
            body: format!("Body of post {id}."),
            user_id: ((id - 1) % 5 + 1) as u32,
        })
        .collect()
}

pub async fn run(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_posts(posts)).await
}

async fn list_posts(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    Json(posts.rows.values().take(limit).cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> (StatusCode, Json<Post>) {
    let post = db.write().await.insert(Post {
        id: 0,
        title: input.title,
        body: input.body,
        user_id: input.user_id,
    });
    info!(id = post.id, "post created");
    (StatusCode::CREATED, Json(post))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.title = input.title;
    post.body = input.body;
    post.user_id = input.user_id;
    info!(id, "post updated");
    Ok(Json(post.clone()))
}

/// Deleting an id that does not exist still answers 200, so repeated
/// deletes are harmless.
async fn delete_post(State(db): State<Db>, Path(id): Path<u64>) -> Json<serde_json::Value> {
    if db.write().await.rows.remove(&id).is_some() {
        info!(id, "post deleted");
    }
    Json(serde_json::json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_user_id_in_camel_case() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
            body: "Body".to_string(),
            user_id: 2,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 2);
    }

    #[test]
    fn input_rejects_missing_body() {
        let result: Result<PostInput, _> = serde_json::from_str(r#"{"title":"t","userId":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn insert_assigns_ids_after_highest_seen() {
        let mut posts = Posts::default();
        posts.insert(Post {
            id: 7,
            title: "seed".to_string(),
            body: String::new(),
            user_id: 1,
        });
        let created = posts.insert(Post {
            id: 0,
            title: "new".to_string(),
            body: String::new(),
            user_id: 1,
        });
        assert_eq!(created.id, 8);
    }

    #[test]
    fn sample_posts_cycle_authors() {
        let posts = sample_posts(6);
        let authors: Vec<u32> = posts.iter().map(|p| p.user_id).collect();
        assert_eq!(authors, vec![1, 2, 3, 4, 5, 1]);
    }
}
