//! Credential sources and request authorization.
use crate::error::{Error, Result};
use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Produces OAuth2 bearer tokens for outgoing requests.
///
/// Implementations are expected to cache and refresh tokens themselves; the
/// client asks for a token before every attempt.
#[async_trait]
pub trait TokenSource: Send + Sync + fmt::Debug {
    async fn token(&self, scopes: &[&str]) -> Result<String>;
}

/// Where the client gets its credentials from.
#[derive(Clone)]
#[non_exhaustive]
pub enum Credentials {
    /// A caller supplied token source.
    TokenSource(Arc<dyn TokenSource>),
    /// The contents of a service account key file.
    ServiceAccountKey(String),
    /// A fixed access token. It is never refreshed.
    AccessToken(String),
    /// No credentials at all, for emulators and API key access.
    Anonymous,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::TokenSource(source) => f.debug_tuple("TokenSource").field(source).finish(),
            Credentials::ServiceAccountKey(_) => f.write_str("ServiceAccountKey(..)"),
            Credentials::AccessToken(_) => f.write_str("AccessToken(..)"),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}

impl Credentials {
    pub fn from_token_source(source: impl TokenSource + 'static) -> Self {
        Credentials::TokenSource(Arc::new(source))
    }
}

/// The credential choice after builder validation.
#[derive(Debug, Clone)]
pub(crate) enum CredentialsSource {
    /// Ambient application default credentials.
    ApplicationDefault,
    /// A service account key file on disk.
    File(PathBuf),
    Explicit(Credentials),
}

#[derive(Debug)]
struct StaticToken(String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self, _scopes: &[&str]) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Token source backed by the `gcp_auth` crate.
#[cfg(feature = "gcp-auth")]
pub struct GcpAuthTokenSource {
    provider: Arc<dyn gcp_auth::TokenProvider>,
}

#[cfg(feature = "gcp-auth")]
impl GcpAuthTokenSource {
    /// Discovers application default credentials: the
    /// `GOOGLE_APPLICATION_CREDENTIALS` key file, gcloud user credentials or
    /// the metadata server, in that order.
    pub async fn application_default() -> Result<Self> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|err| Error::Auth(err.to_string()))?;
        Ok(GcpAuthTokenSource { provider })
    }

    pub fn from_service_account_file(path: impl Into<PathBuf>) -> Result<Self> {
        let account = gcp_auth::CustomServiceAccount::from_file(path.into())
            .map_err(|err| Error::Auth(err.to_string()))?;
        Ok(GcpAuthTokenSource {
            provider: Arc::new(account),
        })
    }

    pub fn from_service_account_key(json: &str) -> Result<Self> {
        let account = gcp_auth::CustomServiceAccount::from_json(json)
            .map_err(|err| Error::Auth(err.to_string()))?;
        Ok(GcpAuthTokenSource {
            provider: Arc::new(account),
        })
    }

    /// The project the discovered credentials belong to.
    pub async fn project_id(&self) -> Result<String> {
        self.provider
            .project_id()
            .await
            .map(|id| id.to_string())
            .map_err(|err| Error::Auth(err.to_string()))
    }
}

#[cfg(feature = "gcp-auth")]
impl fmt::Debug for GcpAuthTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GcpAuthTokenSource")
    }
}

#[cfg(feature = "gcp-auth")]
#[async_trait]
impl TokenSource for GcpAuthTokenSource {
    async fn token(&self, scopes: &[&str]) -> Result<String> {
        let token = self
            .provider
            .token(scopes)
            .await
            .map_err(|err| Error::Auth(err.to_string()))?;
        Ok(token.as_str().to_string())
    }
}

/// Adds credentials to outgoing requests.
#[derive(Debug, Clone)]
pub(crate) struct Authorizer {
    source: Option<Arc<dyn TokenSource>>,
    scopes: Vec<String>,
}

impl Authorizer {
    /// Resolves the configured credentials into a token source. Ambient
    /// discovery and key parsing happen here, on first use of the client.
    pub(crate) async fn new(source: &CredentialsSource, scopes: Vec<String>) -> Result<Self> {
        let source: Option<Arc<dyn TokenSource>> = match source {
            CredentialsSource::Explicit(Credentials::TokenSource(source)) => Some(source.clone()),
            CredentialsSource::Explicit(Credentials::AccessToken(token)) => {
                Some(Arc::new(StaticToken(token.clone())))
            }
            CredentialsSource::Explicit(Credentials::Anonymous) => None,
            #[cfg(feature = "gcp-auth")]
            CredentialsSource::Explicit(Credentials::ServiceAccountKey(json)) => {
                Some(Arc::new(GcpAuthTokenSource::from_service_account_key(json)?))
            }
            #[cfg(feature = "gcp-auth")]
            CredentialsSource::File(path) => {
                Some(Arc::new(GcpAuthTokenSource::from_service_account_file(path.clone())?))
            }
            #[cfg(feature = "gcp-auth")]
            CredentialsSource::ApplicationDefault => {
                Some(Arc::new(GcpAuthTokenSource::application_default().await?))
            }
            #[cfg(not(feature = "gcp-auth"))]
            _ => {
                return Err(Error::Config(
                    "service account and application default credentials require the `gcp-auth` feature"
                        .into(),
                ))
            }
        };
        Ok(Authorizer { source, scopes })
    }

    /// Inserts the `authorization` header when a token source is configured.
    pub(crate) async fn authorize(&self, headers: &mut HeaderMap) -> Result<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        let scopes: Vec<&str> = self.scopes.iter().map(String::as_str).collect();
        let token = source.token(&scopes).await?;
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| Error::Auth(format!("token is not a valid header value: {err}")))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn access_token_becomes_bearer_header() {
        let authorizer = Authorizer::new(
            &CredentialsSource::Explicit(Credentials::AccessToken("ya29.token".into())),
            vec!["https://www.googleapis.com/auth/logging.write".into()],
        )
        .await
        .unwrap();

        let mut headers = HeaderMap::new();
        authorizer.authorize(&mut headers).await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer ya29.token");
    }

    #[tokio::test]
    async fn anonymous_adds_nothing() {
        let authorizer =
            Authorizer::new(&CredentialsSource::Explicit(Credentials::Anonymous), vec![])
                .await
                .unwrap();

        let mut headers = HeaderMap::new();
        authorizer.authorize(&mut headers).await.unwrap();
        assert!(headers.is_empty());
    }

    #[tokio::test]
    async fn token_source_sees_configured_scopes() {
        #[derive(Debug)]
        struct ScopeEcho;

        #[async_trait]
        impl TokenSource for ScopeEcho {
            async fn token(&self, scopes: &[&str]) -> Result<String> {
                Ok(scopes.join(" "))
            }
        }

        let authorizer = Authorizer::new(
            &CredentialsSource::Explicit(Credentials::from_token_source(ScopeEcho)),
            vec!["a".into(), "b".into()],
        )
        .await
        .unwrap();

        let mut headers = HeaderMap::new();
        authorizer.authorize(&mut headers).await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer a b");
    }
}
