//! Snapshot of everything the store owns.

use crate::types::{Post, PostId};

/// Lifecycle of the most recent load. Create, update and delete never touch
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }
}

/// `items` is unique by `id` and ordered: newest creations first, loads in
/// server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl PostsState {
    pub fn position(&self, id: PostId) -> Option<usize> {
        self.items.iter().position(|post| post.id == id)
    }
}
