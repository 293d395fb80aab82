//! Zero-based page requests and the pages returned for them.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which slice of an ordered result to return: items
/// `[page * size, page * size + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
  pub page: u32,
  pub size: u32,
}

impl Default for PageRequest {
  fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

impl PageRequest {
  pub fn new(page: u32, size: u32) -> Self { Self { page, size } }

  /// Number of rows to skip.
  pub fn offset(&self) -> u64 { u64::from(self.page) * u64::from(self.size) }

  pub fn limit(&self) -> u64 { u64::from(self.size) }

  /// Reject empty pages and pages larger than `max_size`. Page numbers past
  /// the end are valid and simply yield no items.
  pub fn validate(&self, max_size: u32) -> Result<()> {
    if self.size == 0 {
      return Err(Error::InvalidPage("page size must be at least 1".into()));
    }
    if self.size > max_size {
      return Err(Error::InvalidPage(format!(
        "page size {} exceeds the maximum of {max_size}",
        self.size
      )));
    }
    Ok(())
  }
}

/// Size bounds applied by the listing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
  /// Used when the caller does not ask for a size.
  pub default_size: u32,
  pub max_size:     u32,
}

impl Default for PageLimits {
  fn default() -> Self {
    Self { default_size: DEFAULT_PAGE_SIZE, max_size: MAX_PAGE_SIZE }
  }
}

impl PageLimits {
  /// Build a request, filling in defaults for missing parameters.
  pub fn request(&self, page: Option<u32>, size: Option<u32>) -> PageRequest {
    PageRequest::new(page.unwrap_or(0), size.unwrap_or(self.default_size))
  }
}

/// One page of an ordered result plus the total the page was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub total: u64,
  pub page:  u32,
  pub size:  u32,
}

impl<T> Page<T> {
  pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
    Self { items, total, page: request.page, size: request.size }
  }

  pub fn total_pages(&self) -> u64 {
    if self.size == 0 {
      return 0;
    }
    self.total.div_ceil(u64::from(self.size))
  }

  pub fn has_next(&self) -> bool { u64::from(self.page) + 1 < self.total_pages() }
}
