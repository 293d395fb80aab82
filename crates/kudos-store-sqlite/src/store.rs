//! [`SqliteStore`] — the SQLite implementation of the `kudos_core::store`
//! capabilities.

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use kudos_core::{
  content::{Comment, ContentItem, ContentRef, ContentType, Post},
  like::Like,
  store::{ContentLookup, Deletion, Insertion, LikeStore, LikedContentQuery},
};

use crate::{
  Result,
  encode::{
    ContentTable, LIKE_COLUMNS, RawLike, decode_dt, decode_uuid, encode_content_type,
    encode_dt, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A like store backed by a single SQLite file. Also hosts the `posts` and
/// `comments` tables the likes point at.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(?path, "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Content maintenance ───────────────────────────────────────────────────

  pub async fn insert_post(&self, post: &Post) -> Result<()> {
    let post_id_str   = encode_uuid(post.post_id);
    let author_id_str = encode_uuid(post.author_id);
    let title         = post.title.clone();
    let body          = post.body.clone();
    let at_str        = encode_dt(post.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO posts (post_id, author_id, title, body, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![post_id_str, author_id_str, title, body, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub async fn insert_comment(&self, comment: &Comment) -> Result<()> {
    let comment_id_str = encode_uuid(comment.comment_id);
    let post_id_str    = encode_uuid(comment.post_id);
    let author_id_str  = encode_uuid(comment.author_id);
    let body           = comment.body.clone();
    let at_str         = encode_dt(comment.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO comments (comment_id, post_id, author_id, body, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![comment_id_str, post_id_str, author_id_str, body, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Remove a post. Likes pointing at it are left in place. Returns whether
  /// a row was deleted.
  pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
    self.delete_content::<Post>(post_id).await
  }

  /// Remove a comment. Likes pointing at it are left in place.
  pub async fn delete_comment(&self, comment_id: Uuid) -> Result<bool> {
    self.delete_content::<Comment>(comment_id).await
  }

  async fn delete_content<T: ContentTable>(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);
    let sql = format!("DELETE FROM {} WHERE {} = ?1", T::TABLE, T::ID_COLUMN);

    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id_str])?))
      .await?;
    Ok(removed > 0)
  }

  // ── Generic content queries ───────────────────────────────────────────────

  async fn lookup<T: ContentTable>(&self, id: Uuid) -> Result<Option<ContentItem>> {
    let id_str = encode_uuid(id);
    let sql = format!(
      "SELECT {owner}, created_at FROM {table} WHERE {id_col} = ?1",
      owner = T::OWNER_COLUMN,
      table = T::TABLE,
      id_col = T::ID_COLUMN,
    );

    let raw: Option<(String, String)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| {
              Ok((row.get(0)?, row.get(1)?))
            })
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|(owner, at)| {
        Ok(ContentItem {
          content_id: id,
          owner_id:   decode_uuid(&owner)?,
          created_at: decode_dt(&at)?,
        })
      })
      .transpose()
  }

  /// Content of type `T` joined to `user_id`'s likes of that type, newest
  /// first. Likes whose content row is gone fall out of the inner join.
  async fn liked_page<T: ContentTable>(
    &self,
    user_id: Uuid,
    offset:  u64,
    limit:   u64,
  ) -> Result<Vec<T>> {
    let user_id_str = encode_uuid(user_id);
    let type_str    = encode_content_type(T::CONTENT_TYPE);
    let limit_val   = i64::try_from(limit).unwrap_or(i64::MAX);
    let offset_val  = i64::try_from(offset).unwrap_or(i64::MAX);

    let columns = T::COLUMNS
      .iter()
      .map(|c| format!("c.{c}"))
      .collect::<Vec<_>>()
      .join(", ");
    let sql = format!(
      "SELECT {columns}
       FROM likes l
       INNER JOIN {table} c ON c.{id_col} = l.content_id
       WHERE l.user_id = ?1
         AND l.content_type = ?2
       ORDER BY c.created_at DESC, c.{id_col} DESC
       LIMIT ?3 OFFSET ?4",
      table = T::TABLE,
      id_col = T::ID_COLUMN,
    );

    let raws: Vec<T::Raw> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![user_id_str, type_str, limit_val, offset_val],
            |row| T::read_raw(row),
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(T::decode).collect()
  }

  async fn select_likes(&self, filter: &'static str, params: Vec<String>) -> Result<Vec<Like>> {
    let sql = format!("SELECT {LIKE_COLUMNS} FROM likes WHERE {filter} ORDER BY created_at, like_id");

    let raws: Vec<RawLike> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), RawLike::read)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLike::into_like).collect()
  }
}

// ─── ContentLookup impl ──────────────────────────────────────────────────────

impl ContentLookup for SqliteStore {
  type Error = crate::Error;

  async fn find_content(&self, content: ContentRef) -> Result<Option<ContentItem>> {
    match content.content_type {
      ContentType::Post => self.lookup::<Post>(content.content_id).await,
      ContentType::Comment => self.lookup::<Comment>(content.content_id).await,
    }
  }
}

// ─── LikeStore impl ──────────────────────────────────────────────────────────

impl LikeStore for SqliteStore {
  type Error = crate::Error;

  async fn find_one(&self, content: ContentRef, user_id: Uuid) -> Result<Option<Like>> {
    let type_str    = encode_content_type(content.content_type);
    let content_str = encode_uuid(content.content_id);
    let user_str    = encode_uuid(user_id);
    let sql = format!(
      "SELECT {LIKE_COLUMNS} FROM likes
       WHERE content_type = ?1 AND content_id = ?2 AND user_id = ?3"
    );

    let raw: Option<RawLike> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &sql,
              rusqlite::params![type_str, content_str, user_str],
              RawLike::read,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawLike::into_like).transpose()
  }

  async fn find_all_by_content(&self, content: ContentRef) -> Result<Vec<Like>> {
    self
      .select_likes(
        "content_type = ?1 AND content_id = ?2",
        vec![
          encode_content_type(content.content_type).to_owned(),
          encode_uuid(content.content_id),
        ],
      )
      .await
  }

  async fn find_all_by_user(
    &self,
    user_id:      Uuid,
    content_type: ContentType,
  ) -> Result<Vec<Like>> {
    self
      .select_likes(
        "user_id = ?1 AND content_type = ?2",
        vec![encode_uuid(user_id), encode_content_type(content_type).to_owned()],
      )
      .await
  }

  async fn insert(&self, like: Like) -> Result<Insertion> {
    let like_id_str    = encode_uuid(like.like_id);
    let user_id_str    = encode_uuid(like.user_id);
    let type_str       = encode_content_type(like.content_type);
    let content_id_str = encode_uuid(like.content_id);
    let at_str         = encode_dt(like.created_at);

    let inserted = self
      .conn
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO likes (like_id, user_id, content_type, content_id, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![like_id_str, user_id_str, type_str, content_id_str, at_str],
        );
        match res {
          Ok(_) => Ok(true),
          // UNIQUE (user_id, content_type, content_id) already holds a row.
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    Ok(if inserted { Insertion::Inserted(like) } else { Insertion::Duplicate })
  }

  async fn delete(&self, like: Like) -> Result<Deletion> {
    let like_id_str = encode_uuid(like.like_id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM likes WHERE like_id = ?1", rusqlite::params![like_id_str])?)
      })
      .await?;

    Ok(if removed > 0 { Deletion::Deleted } else { Deletion::Missing })
  }
}

// ─── LikedContentQuery impl ──────────────────────────────────────────────────

impl<T: ContentTable> LikedContentQuery<T> for SqliteStore {
  type Error = crate::Error;

  async fn liked(&self, user_id: Uuid, offset: u64, limit: u64) -> Result<Vec<T>> {
    self.liked_page::<T>(user_id, offset, limit).await
  }

  async fn count_liked(&self, user_id: Uuid) -> Result<u64> {
    let user_str = encode_uuid(user_id);
    let type_str = encode_content_type(T::CONTENT_TYPE);

    let count: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*) FROM likes WHERE user_id = ?1 AND content_type = ?2",
          rusqlite::params![user_str, type_str],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(u64::try_from(count).unwrap_or_default())
  }
}
