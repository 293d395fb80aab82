//! Core types and trait definitions for the Kudos like service.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement the capability traits in [`store`]; the
//! [`engine::LikeToggleEngine`] and [`query::LikedContent`] services are
//! written against those traits only.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod content;
pub mod engine;
pub mod error;
pub mod like;
pub mod page;
pub mod query;
pub mod store;

pub use error::{Error, Result};
