use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// A provider that answers with a non-`"ok"` status is *not* an error; that case is
/// reported through [`crate::news::ProviderFailure`] alongside the partial results.
#[derive(Debug, Error)]
pub enum NsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),

    /// An article carried a `publishedAt` value that is not `YYYY-MM-DDTHH:MM:SSZ`.
    #[error("unexpected publishedAt format: {value:?}")]
    Date {
        /// The raw value received from the provider.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// No API key was configured on the client builder.
    #[error("missing news API key (set NEWS_API_KEY)")]
    MissingApiKey,

    /// The filtered table could not be serialized for export.
    #[error("export failed: {0}")]
    Export(#[source] serde_json::Error),

    /// Writing an export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
