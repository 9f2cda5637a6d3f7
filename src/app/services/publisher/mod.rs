//! Report publishing
//!
//! [`Publisher`] is the seam to the outside channel. [`MastodonPublisher`]
//! posts a status; [`ConsolePublisher`] writes the text locally and is used
//! in debug mode. Failures are returned to the caller and never retried.

pub mod console;
pub mod mastodon;

pub use console::ConsolePublisher;
pub use mastodon::MastodonPublisher;

use crate::Result;
use serde::Serialize;
use std::future::Future;

/// What a publisher reports back after a successful publish
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReceipt {
    /// Identifier assigned by the remote channel
    pub id: Option<String>,
    /// Public URL of the published text
    pub url: Option<String>,
}

/// Channel the final report is emitted to
pub trait Publisher {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Publish the text
    fn publish(&self, text: &str) -> impl Future<Output = Result<PublishReceipt>> + Send;
}
