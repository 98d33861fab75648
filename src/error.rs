use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures of a single catalog page request.
///
/// None of these escape a fan-out except for the first page, where they
/// abort the whole cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("access denied fetching page {page}")]
    AccessDenied { page: u32 },

    #[error("malformed payload for page {page}: {reason}")]
    Malformed { page: u32, reason: String },

    #[error("transient failure fetching page {page}: {reason}")]
    Transient { page: u32, reason: String },
}

impl CatalogError {
    /// Page index the failure belongs to.
    #[must_use]
    pub fn page(&self) -> u32 {
        match self {
            Self::AccessDenied { page }
            | Self::Malformed { page, .. }
            | Self::Transient { page, .. } => *page,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("snapshot store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
