//! Handlers for `/likes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/likes?contentType=&contentId=` | Toggle; returns new state and count |
//! | `GET`  | `/likes/count?contentType=&contentId=` | No auth required |
//! | `GET`  | `/likes/posts[?page=&size=]` | Acting user's liked posts |
//! | `GET`  | `/likes/comments[?page=&size=]` | Acting user's liked comments |
//! | `GET`  | `/likes/summary` | Acting user's like counts per type |

use axum::{
  Json,
  extract::{Query, State},
};
use kudos_core::{
  content::{Comment, Post},
  like::LikeSummary,
  page::Page,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ApiState, Backend, auth::ActingUser, error::ApiError};

/// Identifies the target content. `content_type` stays a plain string so an
/// unknown discriminator surfaces as a domain error rather than a generic
/// query rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentParams {
  pub content_type: String,
  pub content_id:   Uuid,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
  pub page: Option<u32>,
  pub size: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
  pub liked: bool,
  pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
  pub count: u64,
}

// ─── Toggle ───────────────────────────────────────────────────────────────────

/// `POST /likes?contentType=<type>&contentId=<uuid>`
pub async fn toggle<S: Backend>(
  State(state): State<ApiState<S>>,
  ActingUser(user_id): ActingUser,
  Query(params): Query<ContentParams>,
) -> Result<Json<ToggleResponse>, ApiError> {
  let liked = state
    .engine
    .toggle(&params.content_type, params.content_id, user_id)
    .await?;
  let count = state
    .engine
    .count(&params.content_type, params.content_id)
    .await?;
  Ok(Json(ToggleResponse { liked, count }))
}

// ─── Count ────────────────────────────────────────────────────────────────────

/// `GET /likes/count?contentType=<type>&contentId=<uuid>`
pub async fn count<S: Backend>(
  State(state): State<ApiState<S>>,
  Query(params): Query<ContentParams>,
) -> Result<Json<CountResponse>, ApiError> {
  let count = state
    .engine
    .count(&params.content_type, params.content_id)
    .await?;
  Ok(Json(CountResponse { count }))
}

// ─── Listings ─────────────────────────────────────────────────────────────────

/// `GET /likes/posts[?page=<n>&size=<n>]`
pub async fn liked_posts<S: Backend>(
  State(state): State<ApiState<S>>,
  ActingUser(user_id): ActingUser,
  Query(params): Query<PageParams>,
) -> Result<Json<Page<Post>>, ApiError> {
  let request = state.liked.limits().request(params.page, params.size);
  Ok(Json(state.liked.liked_posts(user_id, request).await?))
}

/// `GET /likes/comments[?page=<n>&size=<n>]`
pub async fn liked_comments<S: Backend>(
  State(state): State<ApiState<S>>,
  ActingUser(user_id): ActingUser,
  Query(params): Query<PageParams>,
) -> Result<Json<Page<Comment>>, ApiError> {
  let request = state.liked.limits().request(params.page, params.size);
  Ok(Json(state.liked.liked_comments(user_id, request).await?))
}

/// `GET /likes/summary`
pub async fn summary<S: Backend>(
  State(state): State<ApiState<S>>,
  ActingUser(user_id): ActingUser,
) -> Result<Json<LikeSummary>, ApiError> {
  Ok(Json(state.engine.summary(user_id).await?))
}
