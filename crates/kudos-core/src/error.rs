//! Error types for `kudos-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::content::ContentType;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown content type: {0:?}")]
  InvalidContentType(String),

  #[error("{content_type} not found: {content_id}")]
  ContentNotFound {
    content_type: ContentType,
    content_id:   Uuid,
  },

  #[error("users cannot like or unlike their own content")]
  SelfLikeForbidden,

  #[error("invalid page request: {0}")]
  InvalidPage(String),

  /// A backend failure, passed through unchanged.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
