//! JSON REST API for Kudos.
//!
//! Exposes an axum [`Router`] backed by any store implementing the
//! `kudos_core::store` capabilities. Authentication, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", kudos_api::api_router(store.clone(), PageLimits::default()))
//! ```

pub mod auth;
pub mod error;
pub mod likes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use kudos_core::{
  content::{Comment, Post},
  engine::LikeToggleEngine,
  page::PageLimits,
  query::LikedContent,
  store::{ContentLookup, LikeStore, LikedContentQuery},
};

pub use auth::ActingUser;
pub use error::ApiError;

/// Everything the router needs from a storage backend.
pub trait Backend:
  LikeStore + ContentLookup + LikedContentQuery<Post> + LikedContentQuery<Comment> + 'static
{
}

impl<T> Backend for T where
  T: LikeStore + ContentLookup + LikedContentQuery<Post> + LikedContentQuery<Comment> + 'static
{
}

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub engine: LikeToggleEngine<S, S>,
  pub liked:  LikedContent<S>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self { Self { engine: self.engine.clone(), liked: self.liked.clone() } }
}

impl<S: Backend> ApiState<S> {
  pub fn new(store: Arc<S>, limits: PageLimits) -> Self {
    Self {
      engine: LikeToggleEngine::new(store.clone(), store.clone()),
      liked:  LikedContent::new(store, limits),
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S: Backend>(store: Arc<S>, limits: PageLimits) -> Router<()> {
  Router::new()
    .route("/likes", post(likes::toggle::<S>))
    .route("/likes/count", get(likes::count::<S>))
    .route("/likes/posts", get(likes::liked_posts::<S>))
    .route("/likes/comments", get(likes::liked_comments::<S>))
    .route("/likes/summary", get(likes::summary::<S>))
    .with_state(ApiState::new(store, limits))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests;
