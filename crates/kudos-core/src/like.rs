//! The like record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{ContentRef, ContentType};

/// One user's endorsement of one post or comment.
///
/// At most one like exists per `(user_id, content_type, content_id)`. Likes
/// are hard-deleted on unlike; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
  pub like_id:      Uuid,
  pub user_id:      Uuid,
  pub content_type: ContentType,
  pub content_id:   Uuid,
  pub created_at:   DateTime<Utc>,
}

impl Like {
  /// A fresh like stamped with the current time.
  pub fn new(user_id: Uuid, content: ContentRef) -> Self {
    Self {
      like_id: Uuid::new_v4(),
      user_id,
      content_type: content.content_type,
      content_id: content.content_id,
      created_at: Utc::now(),
    }
  }

  pub fn content(&self) -> ContentRef {
    ContentRef::new(self.content_type, self.content_id)
  }
}

/// How many posts and comments a user currently likes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeSummary {
  pub posts:    u64,
  pub comments: u64,
}
