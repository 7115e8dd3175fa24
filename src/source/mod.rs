pub mod http;

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;

pub use http::HttpSource;

/// One entry of the dropdown, as returned by the suggestion endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Opaque, caller-defined identifier handed to the host on selection
    pub id: i64,
    /// Display text
    pub title: String,
}

impl Suggestion {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Future returned by [`SuggestionSource::fetch`]
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<Suggestion>, FetchError>> + Send>>;

/// Something that can turn a query into ranked suggestions (extensibility point)
pub trait SuggestionSource: Send + Sync {
    /// Name of this source, for logging
    fn name(&self) -> &str;

    /// Look up suggestions for `query`. The returned future owns everything it
    /// needs so it can be spawned and aborted independently of `self`.
    fn fetch(&self, query: String) -> FetchFuture;
}
