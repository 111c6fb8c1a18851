//! The post store: one owned collection of posts kept in step with the
//! remote service.
//!
//! # Design
//! State lives in a `tokio::sync::watch` channel. Each operation awaits the
//! remote call and then applies exactly one `PostsAction` through
//! `send_modify`, which runs `reduce` synchronously and notifies
//! subscribers. Nothing is held across an await, so overlapping operations
//! interleave only at settlement boundaries and their effects land in
//! settlement order. There is no cancellation and no stale-response check:
//! every settled response is applied.
//!
//! Only `load` writes `status`/`error`. Create, update and delete failures
//! are returned to the caller and leave the state untouched.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::reducer::{reduce, PostsAction};
use crate::remote::PostsApi;
use crate::state::PostsState;
use crate::types::{Post, PostDraft, PostId};

pub struct PostStore<A> {
    api: A,
    list_limit: usize,
    state: watch::Sender<PostsState>,
}

impl<A: PostsApi> PostStore<A> {
    pub fn new(api: A, list_limit: usize) -> Self {
        let (state, _) = watch::channel(PostsState::default());
        Self {
            api,
            list_limit,
            state,
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// A copy of the current state. Mutate the store through its operations,
    /// not through this value.
    pub fn state(&self) -> PostsState {
        self.state.borrow().clone()
    }

    /// Receives a fresh snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<PostsState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: PostsAction) {
        self.state.send_modify(|state| reduce(state, action));
    }

    /// Fetch the first `list_limit` posts and make them the whole collection.
    ///
    /// A failure is recorded in `status`/`error` and also returned.
    pub async fn load(&self) -> Result<Vec<Post>, TransportError> {
        self.dispatch(PostsAction::LoadStarted);
        match self.api.list(self.list_limit).await {
            Ok(posts) => {
                debug!(count = posts.len(), "posts loaded");
                self.dispatch(PostsAction::LoadSucceeded(posts.clone()));
                Ok(posts)
            }
            Err(err) => {
                warn!(error = %err, "loading posts failed");
                self.dispatch(PostsAction::LoadFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Create a post and put the server's copy at the front of `items`.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, TransportError> {
        let post = self.api.create(draft).await?;
        debug!(id = post.id, "post created");
        self.dispatch(PostsAction::Created(post.clone()));
        Ok(post)
    }

    /// Replace the entry matching the server's returned `id` in place. If
    /// that entry is gone by the time the response arrives, nothing changes.
    pub async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, TransportError> {
        let post = self.api.update(id, draft).await?;
        debug!(id = post.id, "post updated");
        self.dispatch(PostsAction::Updated(post.clone()));
        Ok(post)
    }

    /// Remove every entry with `id`. Zero matches is not an error.
    pub async fn delete(&self, id: PostId) -> Result<(), TransportError> {
        self.api.delete(id).await?;
        debug!(id, "post deleted");
        self.dispatch(PostsAction::Deleted(id));
        Ok(())
    }

    /// Overwrite `items` locally without contacting the server.
    pub fn set_local_posts(&self, items: Vec<Post>) {
        self.dispatch(PostsAction::ReplaceItems(items));
    }
}
