//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings. Timestamps are stored as
//! RFC 3339 UTC strings with a fixed nine-digit fraction, so lexical order on
//! the column equals chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use kudos_core::{
  content::{Comment, Content, ContentType, Post},
  like::Like,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── ContentType ──────────────────────────────────────────────────────────────

pub fn encode_content_type(ct: ContentType) -> &'static str { ct.as_str() }

pub fn decode_content_type(s: &str) -> Result<ContentType> { Ok(s.parse()?) }

// ─── Content tables ──────────────────────────────────────────────────────────

/// Describes the table holding one kind of likeable content, so the lookup
/// and the liked-content join are written once for posts and comments.
pub trait ContentTable: Content + Sized + Send + 'static {
  const TABLE: &'static str;
  const ID_COLUMN: &'static str;
  const OWNER_COLUMN: &'static str;
  /// Columns of a full row, in the order [`ContentTable::read_raw`] expects.
  const COLUMNS: &'static [&'static str];

  type Raw: Send + 'static;

  fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self::Raw>;

  fn decode(raw: Self::Raw) -> Result<Self>;
}

/// Raw strings read directly from a `posts` row.
pub struct RawPost {
  pub post_id:    String,
  pub author_id:  String,
  pub title:      String,
  pub body:       String,
  pub created_at: String,
}

impl ContentTable for Post {
  const TABLE: &'static str = "posts";
  const ID_COLUMN: &'static str = "post_id";
  const OWNER_COLUMN: &'static str = "author_id";
  const COLUMNS: &'static [&'static str] =
    &["post_id", "author_id", "title", "body", "created_at"];

  type Raw = RawPost;

  fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawPost> {
    Ok(RawPost {
      post_id:    row.get(0)?,
      author_id:  row.get(1)?,
      title:      row.get(2)?,
      body:       row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  fn decode(raw: RawPost) -> Result<Post> {
    Ok(Post {
      post_id:    decode_uuid(&raw.post_id)?,
      author_id:  decode_uuid(&raw.author_id)?,
      title:      raw.title,
      body:       raw.body,
      created_at: decode_dt(&raw.created_at)?,
    })
  }
}

/// Raw strings read directly from a `comments` row.
pub struct RawComment {
  pub comment_id: String,
  pub post_id:    String,
  pub author_id:  String,
  pub body:       String,
  pub created_at: String,
}

impl ContentTable for Comment {
  const TABLE: &'static str = "comments";
  const ID_COLUMN: &'static str = "comment_id";
  const OWNER_COLUMN: &'static str = "author_id";
  const COLUMNS: &'static [&'static str] =
    &["comment_id", "post_id", "author_id", "body", "created_at"];

  type Raw = RawComment;

  fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawComment> {
    Ok(RawComment {
      comment_id: row.get(0)?,
      post_id:    row.get(1)?,
      author_id:  row.get(2)?,
      body:       row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  fn decode(raw: RawComment) -> Result<Comment> {
    Ok(Comment {
      comment_id: decode_uuid(&raw.comment_id)?,
      post_id:    decode_uuid(&raw.post_id)?,
      author_id:  decode_uuid(&raw.author_id)?,
      body:       raw.body,
      created_at: decode_dt(&raw.created_at)?,
    })
  }
}

// ─── Likes ───────────────────────────────────────────────────────────────────

pub const LIKE_COLUMNS: &str = "like_id, user_id, content_type, content_id, created_at";

/// Raw strings read directly from a `likes` row.
pub struct RawLike {
  pub like_id:      String,
  pub user_id:      String,
  pub content_type: String,
  pub content_id:   String,
  pub created_at:   String,
}

impl RawLike {
  /// Reads the columns in [`LIKE_COLUMNS`] order.
  pub fn read(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      like_id:      row.get(0)?,
      user_id:      row.get(1)?,
      content_type: row.get(2)?,
      content_id:   row.get(3)?,
      created_at:   row.get(4)?,
    })
  }

  pub fn into_like(self) -> Result<Like> {
    Ok(Like {
      like_id:      decode_uuid(&self.like_id)?,
      user_id:      decode_uuid(&self.user_id)?,
      content_type: decode_content_type(&self.content_type)?,
      content_id:   decode_uuid(&self.content_id)?,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}
