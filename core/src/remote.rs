//! Async remote service client.
//!
//! `PostsApi` is the seam the store talks to. `RemoteClient` is the real
//! implementation: it builds a request with `PostsClient`, hands it to a
//! `Transport`, and parses the response. One round-trip per call, no retries,
//! no caching.

use async_trait::async_trait;
use tracing::debug;

use crate::client::PostsClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Post, PostDraft, PostId};

/// The four REST operations of the posts service.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self, limit: usize) -> Result<Vec<Post>, TransportError>;
    async fn create(&self, draft: &PostDraft) -> Result<Post, TransportError>;
    async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, TransportError>;
    async fn delete(&self, id: PostId) -> Result<(), TransportError>;
}

pub struct RemoteClient<T = UreqTransport> {
    client: PostsClient,
    transport: T,
}

impl RemoteClient<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(PostsClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> RemoteClient<T> {
    pub fn new(client: PostsClient, transport: T) -> Self {
        Self { client, transport }
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!(method, %path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(method, %path, status = response.status, "response received");
        Ok(response)
    }
}

#[async_trait]
impl<T: Transport> PostsApi for RemoteClient<T> {
    async fn list(&self, limit: usize) -> Result<Vec<Post>, TransportError> {
        let response = self.round_trip(self.client.build_list_posts(limit)).await?;
        self.client.parse_list_posts(response)
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, TransportError> {
        let request = self.client.build_create_post(draft)?;
        let response = self.round_trip(request).await?;
        self.client.parse_create_post(response)
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, TransportError> {
        let request = self.client.build_update_post(id, draft)?;
        let response = self.round_trip(request).await?;
        self.client.parse_update_post(response)
    }

    async fn delete(&self, id: PostId) -> Result<(), TransportError> {
        let response = self.round_trip(self.client.build_delete_post(id)).await?;
        self.client.parse_delete_post(response)
    }
}
