//! State transitions applied when a store operation settles.
//!
//! `reduce` is the only place `PostsState` changes. Every action is applied
//! synchronously and in full, so no reader ever sees a half-applied update.

use crate::state::{PostsState, RequestStatus};
use crate::types::{Post, PostId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsAction {
    LoadStarted,
    LoadSucceeded(Vec<Post>),
    LoadFailed(String),
    Created(Post),
    Updated(Post),
    Deleted(PostId),
    ReplaceItems(Vec<Post>),
}

pub fn reduce(state: &mut PostsState, action: PostsAction) {
    match action {
        PostsAction::LoadStarted => {
            state.status = RequestStatus::Loading;
            state.error = None;
        }
        PostsAction::LoadSucceeded(items) => {
            state.status = RequestStatus::Succeeded;
            state.items = items;
        }
        PostsAction::LoadFailed(message) => {
            state.status = RequestStatus::Failed;
            state.error = Some(message);
        }
        PostsAction::Created(post) => {
            state.items.insert(0, post);
        }
        PostsAction::Updated(post) => {
            // An entry removed while the update was in flight stays removed.
            if let Some(index) = state.position(post.id) {
                state.items[index] = post;
            }
        }
        PostsAction::Deleted(id) => {
            state.items.retain(|post| post.id != id);
        }
        PostsAction::ReplaceItems(items) => {
            state.items = items;
        }
    }
}
