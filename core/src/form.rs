//! Editing form for a single post.
//!
//! `PostForm` holds what the user is typing and whether they are creating a
//! new post or editing an existing one. Submitting routes to `create` or
//! `update` on the store and resets the form once the request settles.

use thiserror::Error;

use crate::error::TransportError;
use crate::remote::PostsApi;
use crate::store::PostStore;
use crate::types::{Post, PostDraft, PostId, USER_IDS};

const DEFAULT_USER_ID: u32 = 1;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("body must not be empty")]
    EmptyBody,

    #[error("unknown user {0}")]
    UnknownUser(u32),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
    pub user_id: u32,
    editing: Option<PostId>,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            user_id: DEFAULT_USER_ID,
            editing: None,
        }
    }
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<PostId> {
        self.editing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update"
        } else {
            "Create"
        }
    }

    /// Load `post` into the form; the next submit updates it.
    pub fn edit(&mut self, post: &Post) {
        self.title = post.title.clone();
        self.body = post.body.clone();
        self.user_id = post.user_id;
        self.editing = Some(post.id);
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<PostDraft, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(FormError::EmptyBody);
        }
        if !USER_IDS.contains(&self.user_id) {
            return Err(FormError::UnknownUser(self.user_id));
        }
        Ok(PostDraft::new(self.title.clone(), self.body.clone(), self.user_id))
    }

    /// Send the form through `store`.
    ///
    /// An invalid form sends nothing and is left as it is. Otherwise the form
    /// is cleared once the request settles, whether it succeeded or not.
    pub async fn submit<A: PostsApi>(&mut self, store: &PostStore<A>) -> Result<Post, FormError> {
        let draft = self.validate()?;
        let outcome = match self.editing {
            Some(id) => store.update(id, &draft).await,
            None => store.create(&draft).await,
        };
        self.cancel();
        Ok(outcome?)
    }
}
