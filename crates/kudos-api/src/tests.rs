use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use kudos_core::{
  content::{Comment, Post},
  like::LikeSummary,
  page::{Page, PageLimits},
};
use kudos_store_sqlite::SqliteStore;
use serde::de::DeserializeOwned;
use tower::ServiceExt as _;
use uuid::Uuid;

use super::*;
use crate::likes::{CountResponse, ToggleResponse};

async fn make_store() -> SqliteStore { SqliteStore::open_in_memory().await.unwrap() }

async fn seed_post(store: &SqliteStore, author_id: Uuid, minutes: i64) -> Post {
  let post = Post {
    post_id: Uuid::new_v4(),
    author_id,
    title: format!("post {minutes}"),
    body: String::new(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes),
  };
  store.insert_post(&post).await.unwrap();
  post
}

async fn send(
  store: &SqliteStore,
  method: &str,
  uri: &str,
  user: Option<Uuid>,
) -> axum::response::Response {
  let mut builder = Request::builder().method(method).uri(uri);
  if let Some(user) = user {
    builder = builder.header(auth::USER_HEADER, user.to_string());
  }
  let req = builder.body(Body::empty()).unwrap();
  api_router(Arc::new(store.clone()), PageLimits::default())
    .oneshot(req)
    .await
    .unwrap()
}

async fn json<T: DeserializeOwned>(resp: axum::response::Response) -> T {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

// ── Toggle ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_returns_state_and_count() {
  let store = make_store().await;
  let post = seed_post(&store, Uuid::new_v4(), 0).await;
  let user = Uuid::new_v4();
  let uri = format!("/likes?contentType=post&contentId={}", post.post_id);

  let resp = send(&store, "POST", &uri, Some(user)).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: ToggleResponse = json(resp).await;
  assert!(body.liked);
  assert_eq!(body.count, 1);

  let resp = send(&store, "POST", &uri, Some(user)).await;
  let body: ToggleResponse = json(resp).await;
  assert!(!body.liked);
  assert_eq!(body.count, 0);
}

#[tokio::test]
async fn toggle_without_user_is_unauthorized() {
  let store = make_store().await;
  let post = seed_post(&store, Uuid::new_v4(), 0).await;
  let uri = format!("/likes?contentType=post&contentId={}", post.post_id);

  let resp = send(&store, "POST", &uri, None).await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn toggle_error_statuses() {
  let store = make_store().await;
  let owner = Uuid::new_v4();
  let post = seed_post(&store, owner, 0).await;

  let uri = format!("/likes?contentType=video&contentId={}", post.post_id);
  let resp = send(&store, "POST", &uri, Some(Uuid::new_v4())).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let uri = format!("/likes?contentType=post&contentId={}", post.post_id);
  let resp = send(&store, "POST", &uri, Some(owner)).await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);

  let uri = format!("/likes?contentType=comment&contentId={}", post.post_id);
  let resp = send(&store, "POST", &uri, Some(Uuid::new_v4())).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn count_needs_no_user() {
  let store = make_store().await;
  let uri = format!("/likes/count?contentType=comment&contentId={}", Uuid::new_v4());

  let resp = send(&store, "GET", &uri, None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: CountResponse = json(resp).await;
  assert_eq!(body.count, 0);
}

// ── Listings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn liked_posts_use_default_page_size() {
  let store = make_store().await;
  let author = Uuid::new_v4();
  let user = Uuid::new_v4();

  for minutes in 0..7 {
    let post = seed_post(&store, author, minutes).await;
    let uri = format!("/likes?contentType=post&contentId={}", post.post_id);
    send(&store, "POST", &uri, Some(user)).await;
  }

  let resp = send(&store, "GET", "/likes/posts", Some(user)).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let page: Page<Post> = json(resp).await;
  assert_eq!(page.items.len(), 5);
  assert_eq!(page.total, 7);
  assert_eq!(page.items[0].title, "post 6");

  let resp = send(&store, "GET", "/likes/posts?page=1", Some(user)).await;
  let page: Page<Post> = json(resp).await;
  let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
  assert_eq!(titles, ["post 1", "post 0"]);
}

#[tokio::test]
async fn oversized_page_is_bad_request() {
  let store = make_store().await;
  let resp = send(&store, "GET", "/likes/comments?size=1000", Some(Uuid::new_v4())).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let resp = send(&store, "GET", "/likes/comments?size=0", Some(Uuid::new_v4())).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_comment_listing() {
  let store = make_store().await;
  let resp = send(&store, "GET", "/likes/comments?page=3&size=10", Some(Uuid::new_v4())).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let page: Page<Comment> = json(resp).await;
  assert!(page.items.is_empty());
  assert_eq!(page.total, 0);
  assert_eq!(page.page, 3);
}

#[tokio::test]
async fn summary_counts_liked_posts() {
  let store = make_store().await;
  let user = Uuid::new_v4();
  let post = seed_post(&store, Uuid::new_v4(), 0).await;
  let uri = format!("/likes?contentType=post&contentId={}", post.post_id);
  send(&store, "POST", &uri, Some(user)).await;

  let resp = send(&store, "GET", "/likes/summary", Some(user)).await;
  let summary: LikeSummary = json(resp).await;
  assert_eq!(summary, LikeSummary { posts: 1, comments: 0 });
}
