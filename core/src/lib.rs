//! Client-side post store for a REST posts service.
//!
//! # Overview
//! `PostStore` owns the local list of posts plus the status of the most
//! recent load, and keeps it in step with the remote service through four
//! async operations: `load`, `create`, `update`, `delete`.
//!
//! # Design
//! - `PostsClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `Transport` executes requests; `UreqTransport` is the real one.
//! - `RemoteClient` joins the two behind the `PostsApi` trait, which is the
//!   only thing the store depends on.
//! - `reduce` applies every state transition; the store calls it once per
//!   settled request.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod reducer;
pub mod remote;
pub mod state;
pub mod store;
pub mod transport;
pub mod types;

pub use client::PostsClient;
pub use config::ClientConfig;
pub use error::TransportError;
pub use form::{FormError, PostForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use reducer::{reduce, PostsAction};
pub use remote::{PostsApi, RemoteClient};
pub use state::{PostsState, RequestStatus};
pub use store::PostStore;
pub use transport::{Transport, UreqTransport};
pub use types::{Post, PostDraft, PostId, USER_IDS};
