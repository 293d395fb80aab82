//! Likeable content and the discriminator that tells posts from comments.
//!
//! Posts and comments are owned by other parts of the platform. This crate
//! only ever reads their identity, owner and creation time, exposed through
//! [`ContentItem`].

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

// ─── Discriminator ───────────────────────────────────────────────────────────

/// The closed set of content kinds a user can like.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
  Post,
  Comment,
}

impl ContentType {
  pub const ALL: [ContentType; 2] = [ContentType::Post, ContentType::Comment];

  /// Canonical boundary encoding; matches the serde representation.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Post => "post",
      Self::Comment => "comment",
    }
  }
}

impl fmt::Display for ContentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ContentType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "post" => Ok(Self::Post),
      "comment" => Ok(Self::Comment),
      other => Err(Error::InvalidContentType(other.to_owned())),
    }
  }
}

// ─── References ──────────────────────────────────────────────────────────────

/// Points at one post or comment. Not a foreign key: the target may have been
/// deleted since the reference was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef {
  pub content_type: ContentType,
  pub content_id:   Uuid,
}

impl ContentRef {
  pub fn new(content_type: ContentType, content_id: Uuid) -> Self {
    Self { content_type, content_id }
  }

  pub fn post(content_id: Uuid) -> Self { Self::new(ContentType::Post, content_id) }

  pub fn comment(content_id: Uuid) -> Self {
    Self::new(ContentType::Comment, content_id)
  }
}

/// The three fields of a post or comment that like handling depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
  pub content_id: Uuid,
  pub owner_id:   Uuid,
  pub created_at: DateTime<Utc>,
}

// ─── Concrete content ────────────────────────────────────────────────────────

/// Implemented by every entity that can be the target of a like.
pub trait Content {
  const CONTENT_TYPE: ContentType;

  fn item(&self) -> ContentItem;

  fn content_ref(&self) -> ContentRef {
    ContentRef::new(Self::CONTENT_TYPE, self.item().content_id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub post_id:    Uuid,
  pub author_id:  Uuid,
  pub title:      String,
  pub body:       String,
  pub created_at: DateTime<Utc>,
}

impl Content for Post {
  const CONTENT_TYPE: ContentType = ContentType::Post;

  fn item(&self) -> ContentItem {
    ContentItem {
      content_id: self.post_id,
      owner_id:   self.author_id,
      created_at: self.created_at,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  pub comment_id: Uuid,
  /// The post this comment was left on.
  pub post_id:    Uuid,
  pub author_id:  Uuid,
  pub body:       String,
  pub created_at: DateTime<Utc>,
}

impl Content for Comment {
  const CONTENT_TYPE: ContentType = ContentType::Comment;

  fn item(&self) -> ContentItem {
    ContentItem {
      content_id: self.comment_id,
      owner_id:   self.author_id,
      created_at: self.created_at,
    }
  }
}
