/// Registry Client
///
/// Client side of the worker registry:
/// - Typed HTTP access to the worker API
/// - View-model holding the sorted, filtered working copy and form state
/// - Session tying user actions to API calls and view updates

use thiserror::Error;

// reqwest-based API client
pub mod api;

// In-memory view-model
pub mod view;

// Action handlers driving the view from the API
pub mod session;

pub use api::WorkerApi;
pub use session::RegistryClient;
pub use view::{RegistryView, SortDirection, WorkerRow};

/// Failures seen by the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
