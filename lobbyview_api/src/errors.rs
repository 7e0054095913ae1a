//! Error types for the API client.

/// Boxed cause carried by [`Error::RequestFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when making API requests.
///
/// Every variant is fatal to the call that produced it. Nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The token was rejected, either by the server (401) or client-side
    /// before any request was sent (`status` is `None` in that case).
    #[error("{}", unauthorized_message(.status))]
    Unauthorized { status: Option<u16> },
    /// The API rate limit was exceeded.
    #[error("Rate limit exceeded, status code: {status}")]
    TooManyRequests { status: u16 },
    /// The server could not fully satisfy the request.
    #[error("Partial content returned, status code: {status}")]
    PartialContent { status: u16 },
    /// Any status other than 200, 206, 401 or 429.
    #[error("Unexpected status code: {status}")]
    UnexpectedStatusCode { status: u16, body: String },
    /// The decoded page counter is past the last page.
    #[error("Invalid page number: {current_page}, total pages: {total_pages}")]
    InvalidPageNumber { current_page: u32, total_pages: u32 },
    /// Transport failure or an undecodable response body.
    #[error("Request failed: {0}")]
    RequestFailed(#[source] BoxError),
    /// Input rejected before a request was built.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn unauthorized_message(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(
            "Unauthorized, status code: {}. Please check your API token and permissions.",
            status
        ),
        None => "Unauthorized. Please check your API token and permissions.".to_string(),
    }
}

impl Error {
    /// The HTTP status that triggered this error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { status } => *status,
            Error::TooManyRequests { status }
            | Error::PartialContent { status }
            | Error::UnexpectedStatusCode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn request_failed<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::RequestFailed(err.into())
    }
}
