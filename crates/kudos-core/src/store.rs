//! Capability traits implemented by storage backends (e.g.
//! `kudos-store-sqlite`).
//!
//! The services in this crate depend on these abstractions, never on a
//! concrete backend. Every method is potentially blocking I/O and returns a
//! `Send` future so the traits work in multi-threaded runtimes.

use std::future::Future;

use uuid::Uuid;

use crate::{
  content::{Content, ContentItem, ContentRef, ContentType},
  like::Like,
};

// ─── Content ─────────────────────────────────────────────────────────────────

/// Resolves a post or comment to the fields like handling needs.
pub trait ContentLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Returns `None` if the referenced content does not exist.
  fn find_content(
    &self,
    content: ContentRef,
  ) -> impl Future<Output = Result<Option<ContentItem>, Self::Error>> + Send + '_;
}

// ─── Likes ───────────────────────────────────────────────────────────────────

/// Outcome of [`LikeStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
  Inserted(Like),
  /// The store already holds a like for the same user and content. Signals a
  /// concurrent toggle that won the race.
  Duplicate,
}

/// Outcome of [`LikeStore::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
  Deleted,
  /// No row matched. Another toggle removed the like after it was read.
  Missing,
}

/// Persistence for like records.
///
/// Backends must reject a second like for the same
/// `(user_id, content_type, content_id)` and report it as
/// [`Insertion::Duplicate`] rather than as an error.
pub trait LikeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn find_one(
    &self,
    content: ContentRef,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Option<Like>, Self::Error>> + Send + '_;

  fn find_all_by_content(
    &self,
    content: ContentRef,
  ) -> impl Future<Output = Result<Vec<Like>, Self::Error>> + Send + '_;

  fn find_all_by_user(
    &self,
    user_id: Uuid,
    content_type: ContentType,
  ) -> impl Future<Output = Result<Vec<Like>, Self::Error>> + Send + '_;

  fn insert(
    &self,
    like: Like,
  ) -> impl Future<Output = Result<Insertion, Self::Error>> + Send + '_;

  /// Hard-delete a like by `like_id`. A like that is already gone is
  /// reported as [`Deletion::Missing`], not as an error.
  fn delete(
    &self,
    like: Like,
  ) -> impl Future<Output = Result<Deletion, Self::Error>> + Send + '_;
}

// ─── Liked-content join ──────────────────────────────────────────────────────

/// The one join-capable query surface: content of type `T` joined to a
/// user's like rows of `T`'s content type.
pub trait LikedContentQuery<T: Content>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Content ordered by `created_at` descending, then by content id
  /// descending, skipping `offset` rows and returning at most `limit`.
  /// Likes whose content no longer exists produce no rows.
  fn liked(
    &self,
    user_id: Uuid,
    offset: u64,
    limit: u64,
  ) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + '_;

  /// Number of like rows the user holds for `T`'s content type, dangling or
  /// not.
  fn count_liked(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
