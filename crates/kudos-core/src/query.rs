//! [`LikedContent`] — paginated, recency-ordered listings of what a user has
//! liked.
//!
//! `total` on every page is the number of the user's like rows for the
//! content type, not the number of joinable content rows. A like whose post
//! or comment was deleted still counts toward `total` but never appears in
//! `items`.

use std::{cmp::Reverse, collections::HashSet, sync::Arc};

use uuid::Uuid;

use crate::{
  Error, Result,
  content::{Comment, Content, Post},
  like::Like,
  page::{Page, PageLimits, PageRequest},
  store::LikedContentQuery,
};

pub struct LikedContent<Q> {
  query:  Arc<Q>,
  limits: PageLimits,
}

impl<Q> Clone for LikedContent<Q> {
  fn clone(&self) -> Self { Self { query: Arc::clone(&self.query), limits: self.limits } }
}

impl<Q> LikedContent<Q> {
  pub fn new(query: Arc<Q>, limits: PageLimits) -> Self { Self { query, limits } }

  pub fn limits(&self) -> PageLimits { self.limits }

  pub async fn liked_posts(&self, user_id: Uuid, request: PageRequest) -> Result<Page<Post>>
  where
    Q: LikedContentQuery<Post>,
  {
    self.liked_page::<Post>(user_id, request).await
  }

  pub async fn liked_comments(
    &self,
    user_id: Uuid,
    request: PageRequest,
  ) -> Result<Page<Comment>>
  where
    Q: LikedContentQuery<Comment>,
  {
    self.liked_page::<Comment>(user_id, request).await
  }

  /// One page of the `T` content `user_id` has liked, with the like-row
  /// total for `T`'s content type.
  pub async fn liked_page<T>(&self, user_id: Uuid, request: PageRequest) -> Result<Page<T>>
  where
    T: Content,
    Q: LikedContentQuery<T>,
  {
    request.validate(self.limits.max_size)?;
    let (offset, limit) = (request.offset(), request.limit());
    let items = LikedContentQuery::<T>::liked(&*self.query, user_id, offset, limit)
      .await
      .map_err(Error::store)?;
    let total = LikedContentQuery::<T>::count_liked(&*self.query, user_id)
      .await
      .map_err(Error::store)?;
    tracing::debug!(
      %user_id,
      content_type = %T::CONTENT_TYPE,
      page = request.page,
      items = items.len(),
      total,
      "liked content"
    );
    Ok(Page::new(items, total, request))
  }
}

// ─── In-process join ─────────────────────────────────────────────────────────

/// Join `likes` against `content` in memory, for backends without a native
/// join. Same semantics as [`LikedContentQuery`]: only `user_id`'s likes of
/// `T`'s content type, newest content first with id as tie-break, and a total
/// taken from the like rows.
pub fn join_page<T, I>(
  likes: &[Like],
  content: I,
  user_id: Uuid,
  request: PageRequest,
) -> Page<T>
where
  T: Content,
  I: IntoIterator<Item = T>,
{
  let liked: HashSet<Uuid> = likes
    .iter()
    .filter(|l| l.user_id == user_id && l.content_type == T::CONTENT_TYPE)
    .map(|l| l.content_id)
    .collect();

  let mut joined: Vec<T> = content
    .into_iter()
    .filter(|c| liked.contains(&c.item().content_id))
    .collect();
  joined.sort_by_key(|c| {
    let item = c.item();
    Reverse((item.created_at, item.content_id))
  });

  let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
  let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
  let items = joined.into_iter().skip(offset).take(limit).collect();

  let total = likes
    .iter()
    .filter(|l| l.user_id == user_id && l.content_type == T::CONTENT_TYPE)
    .count() as u64;

  Page::new(items, total, request)
}
