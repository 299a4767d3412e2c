pub mod animation;
pub mod dictionary;

pub use animation::{AnimationLookup, GiphyClient};
pub use dictionary::{DefinitionLookup, WordsApiClient};

/// Lookup provider details, logged when the app starts
#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("No entry for '{0}'")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Map the status codes both providers share onto lookup errors
pub(crate) fn check_status(
    status: reqwest::StatusCode,
    word: &str,
) -> Result<(), LookupError> {
    match status.as_u16() {
        401 | 403 => Err(LookupError::AuthenticationError),
        404 => Err(LookupError::NotFound(word.to_string())),
        429 => Err(LookupError::RateLimitExceeded),
        _ if !status.is_success() => Err(LookupError::ApiError(format!("HTTP {}", status))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(check_status(StatusCode::OK, "dog").is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, "dog"),
            Err(LookupError::NotFound(word)) if word == "dog"
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN, "dog"),
            Err(LookupError::AuthenticationError)
        ));
        assert!(matches!(
            check_status(StatusCode::TOO_MANY_REQUESTS, "dog"),
            Err(LookupError::RateLimitExceeded)
        ));
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY, "dog"),
            Err(LookupError::ApiError(_))
        ));
    }
}
