//! [`LikeToggleEngine`] — the like/unlike state machine.
//!
//! A toggle looks up the acting user's existing like, validates ownership of
//! the target content, then performs exactly one insert or one delete.
//! Ownership is validated on both branches, so an owner can neither like nor
//! unlike their own content.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
  Error, Result,
  content::{ContentRef, ContentType},
  like::{Like, LikeSummary},
  store::{ContentLookup, Deletion, Insertion, LikeStore},
};

pub struct LikeToggleEngine<L, C> {
  likes:   Arc<L>,
  content: Arc<C>,
}

impl<L, C> Clone for LikeToggleEngine<L, C> {
  fn clone(&self) -> Self {
    Self { likes: Arc::clone(&self.likes), content: Arc::clone(&self.content) }
  }
}

impl<L, C> LikeToggleEngine<L, C>
where
  L: LikeStore,
  C: ContentLookup,
{
  pub fn new(likes: Arc<L>, content: Arc<C>) -> Self { Self { likes, content } }

  /// Toggle the like state of `(content_type, content_id)` for
  /// `acting_user`, decoding the boundary content-type string first.
  ///
  /// Returns `true` if the content is now liked, `false` if it is now
  /// unliked.
  pub async fn toggle(
    &self,
    content_type: &str,
    content_id: Uuid,
    acting_user: Uuid,
  ) -> Result<bool> {
    let content_type: ContentType = content_type.parse()?;
    self
      .toggle_content(ContentRef::new(content_type, content_id), acting_user)
      .await
  }

  pub async fn toggle_content(
    &self,
    content: ContentRef,
    acting_user: Uuid,
  ) -> Result<bool> {
    let existing = self
      .likes
      .find_one(content, acting_user)
      .await
      .map_err(Error::store)?;

    match existing {
      None => {
        self.check_ownership(content, acting_user).await?;
        let like = Like::new(acting_user, content);
        match self.likes.insert(like).await.map_err(Error::store)? {
          Insertion::Inserted(like) => {
            tracing::debug!(
              like_id = %like.like_id,
              user_id = %acting_user,
              content_type = %content.content_type,
              content_id = %content.content_id,
              "liked"
            );
          }
          Insertion::Duplicate => {
            // A concurrent toggle inserted first; the content is liked either
            // way.
            tracing::warn!(
              user_id = %acting_user,
              content_type = %content.content_type,
              content_id = %content.content_id,
              "duplicate like collapsed"
            );
          }
        }
        Ok(true)
      }
      Some(like) => {
        self.check_ownership(content, acting_user).await?;
        let like_id = like.like_id;
        match self.likes.delete(like).await.map_err(Error::store)? {
          Deletion::Deleted => {
            tracing::debug!(
              %like_id,
              user_id = %acting_user,
              content_type = %content.content_type,
              content_id = %content.content_id,
              "unliked"
            );
            Ok(false)
          }
          Deletion::Missing => {
            // Another toggle removed this like first, and may have liked
            // again since. Report whatever state the store now holds.
            let current = self
              .likes
              .find_one(content, acting_user)
              .await
              .map_err(Error::store)?;
            tracing::warn!(
              %like_id,
              user_id = %acting_user,
              content_type = %content.content_type,
              content_id = %content.content_id,
              liked = current.is_some(),
              "stale unlike resolved"
            );
            Ok(current.is_some())
          }
        }
      }
    }
  }

  /// Number of likes recorded for a content item. The content itself is not
  /// required to exist; unknown or unliked content counts zero.
  pub async fn count(&self, content_type: &str, content_id: Uuid) -> Result<u64> {
    let content_type: ContentType = content_type.parse()?;
    self.count_content(ContentRef::new(content_type, content_id)).await
  }

  pub async fn count_content(&self, content: ContentRef) -> Result<u64> {
    let likes = self
      .likes
      .find_all_by_content(content)
      .await
      .map_err(Error::store)?;
    Ok(likes.len() as u64)
  }

  /// How many posts and comments `user_id` has liked.
  pub async fn summary(&self, user_id: Uuid) -> Result<LikeSummary> {
    let posts = self
      .likes
      .find_all_by_user(user_id, ContentType::Post)
      .await
      .map_err(Error::store)?;
    let comments = self
      .likes
      .find_all_by_user(user_id, ContentType::Comment)
      .await
      .map_err(Error::store)?;

    Ok(LikeSummary { posts: posts.len() as u64, comments: comments.len() as u64 })
  }

  async fn check_ownership(&self, content: ContentRef, acting_user: Uuid) -> Result<()> {
    let item = self
      .content
      .find_content(content)
      .await
      .map_err(Error::store)?
      .ok_or(Error::ContentNotFound {
        content_type: content.content_type,
        content_id:   content.content_id,
      })?;

    if item.owner_id == acting_user {
      return Err(Error::SelfLikeForbidden);
    }
    Ok(())
  }
}
