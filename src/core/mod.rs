//! Core components of the `news-sentiment` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`NewsClient`] and its builder.
//! - The primary [`NsError`] type.
//! - Internal networking helpers.

/// The news API client (`NewsClient`), builder, and provider limits.
pub mod client;
/// The primary error type (`NsError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::NsError;
