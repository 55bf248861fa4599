//! GitHub adapter
//!
//! Implements [`CommitSource`](crate::core::ports::CommitSource) and
//! [`CheckReporter`](crate::core::ports::CheckReporter) against the GitHub
//! REST API, and reads the workflow event payload.

mod client;
mod event;
mod pagination;

pub use client::GitHubClient;
pub use event::{EventPayload, load_event};
pub use pagination::{next_link, with_page_size};
