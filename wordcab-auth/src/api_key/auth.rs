//! API key resolution and the authenticator built from it.

use log::*;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{api_key_error, ApiKeyErrorKind, Error};

/// Where the API key in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// Passed by the caller.
    Explicit,
    /// Read from the configuration (`WORDCAB_API_KEY` or `.env`).
    Configured,
}

/// API key authentication for the Wordcab API.
///
/// The key is held as a [`SecretString`], so `Debug` output never includes it.
#[derive(Debug)]
pub struct ApiKeyAuth {
    api_key: SecretString,
    origin: KeyOrigin,
}

impl ApiKeyAuth {
    /// Create an authenticator from a key, rejecting keys that cannot be sent
    /// in a header.
    pub fn new(api_key: SecretString, origin: KeyOrigin) -> Result<Self, Error> {
        Self::validate(api_key.expose_secret())?;
        Ok(Self { api_key, origin })
    }

    /// Picks the explicit key when one is given, otherwise the configured one.
    ///
    /// Empty values count as missing.
    pub fn resolve(explicit: Option<&str>, configured: Option<&str>) -> Result<Self, Error> {
        let (api_key, origin) = match (
            explicit.filter(|key| !key.is_empty()),
            configured.filter(|key| !key.is_empty()),
        ) {
            (Some(key), _) => (key, KeyOrigin::Explicit),
            (None, Some(key)) => (key, KeyOrigin::Configured),
            (None, None) => {
                warn!("No Wordcab API key provided");
                return Err(api_key_error(
                    ApiKeyErrorKind::NotFound,
                    "API Key not found. You must set the WORDCAB_API_KEY environment variable.",
                ));
            }
        };

        debug!("Using {:?} Wordcab API key", origin);
        Self::new(SecretString::new(api_key.to_string()), origin)
    }

    fn validate(api_key: &str) -> Result<(), Error> {
        if api_key.is_empty() {
            return Err(api_key_error(ApiKeyErrorKind::NotFound, "API key is empty"));
        }
        if api_key
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(api_key_error(
                ApiKeyErrorKind::InvalidFormat,
                "API key must not contain whitespace or control characters",
            ));
        }
        Ok(())
    }

    /// Get a reference to the API key.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn origin(&self) -> KeyOrigin {
        self.origin
    }

    /// The `Authorization` header value for this key.
    pub fn authorization(&self) -> SecretString {
        SecretString::new(format!("Bearer {}", self.api_key.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_explicit_key_wins() {
        let auth = ApiKeyAuth::resolve(Some("explicit"), Some("configured")).unwrap();
        assert_eq!(auth.api_key().expose_secret(), "explicit");
        assert_eq!(auth.origin(), KeyOrigin::Explicit);
    }

    #[test]
    fn test_configured_key_is_the_fallback() {
        let auth = ApiKeyAuth::resolve(None, Some("configured")).unwrap();
        assert_eq!(auth.origin(), KeyOrigin::Configured);

        let auth = ApiKeyAuth::resolve(Some(""), Some("configured")).unwrap();
        assert_eq!(
            auth.origin(),
            KeyOrigin::Configured,
            "an empty explicit key counts as missing"
        );
    }

    #[test]
    fn test_missing_key() {
        for (explicit, configured) in [(None, None), (Some(""), None), (None, Some(""))] {
            let err = ApiKeyAuth::resolve(explicit, configured).unwrap_err();
            assert_eq!(err.error_kind, ErrorKind::ApiKey(ApiKeyErrorKind::NotFound));
        }
    }

    #[test]
    fn test_malformed_key() {
        for key in ["two words", "trailing\n", "tab\tkey"] {
            let err = ApiKeyAuth::resolve(Some(key), None).unwrap_err();
            assert_eq!(
                err.error_kind,
                ErrorKind::ApiKey(ApiKeyErrorKind::InvalidFormat),
                "{:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_authorization_is_bearer() {
        let auth = ApiKeyAuth::new(SecretString::new("abc123".to_string()), KeyOrigin::Explicit)
            .unwrap();
        assert_eq!(auth.authorization().expose_secret(), "Bearer abc123");
    }

    #[test]
    fn test_debug_output_hides_key() {
        let auth = ApiKeyAuth::resolve(Some("super_secret_key"), None).unwrap();
        assert!(!format!("{:?}", auth).contains("super_secret_key"));
    }
}
