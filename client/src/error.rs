use thiserror::Error;
use typedex_dex::DexError;
use typedex_protocol::ParseError;
use typedex_store::StoreError;

/// Why a single catalog request failed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum Error {
    /// A remote fetch failed; retrying the sync call is safe
    #[error("Failed to fetch {resource}: {source}")]
    RemoteFetchFailed {
        resource: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Dex(#[from] DexError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn fetch(resource: impl Into<String>, source: impl Into<FetchError>) -> Self {
        Error::RemoteFetchFailed {
            resource: resource.into(),
            source: source.into(),
        }
    }

    /// Identifier of the remote resource that failed, if this is a fetch failure
    pub fn resource(&self) -> Option<&str> {
        match self {
            Error::RemoteFetchFailed { resource, .. } => Some(resource),
            _ => None,
        }
    }

    /// Whether the error stems from user input and should be shown as a message
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::Dex(_))
    }

    /// Whether the store must be reopened before further use
    pub fn is_store_not_initialized(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotInitialized { .. }))
    }
}
