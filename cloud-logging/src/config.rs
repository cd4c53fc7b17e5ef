//! Client configuration.
//!
//! [`ClientBuilder`] collects options programmatically. `build()` validates
//! them, reads the environment once, and freezes the result into an immutable
//! [`ClientConfig`] shared by every call made through the resulting
//! [`Connection`]. Programmatic values always win over environment variables.
use crate::connection::Connection;
use crate::credentials::{Credentials, CredentialsSource};
use crate::error::{Error, Result};
use crate::transport::{DefaultTransport, Transport};
#[cfg(feature = "rest")]
use crate::transport::rest::HttpClient;
use std::fmt;
use std::path::PathBuf;
#[cfg(feature = "rest")]
use std::sync::Arc;
use std::time::Duration;

/// Host of the logging API in the default universe.
pub const DEFAULT_ENDPOINT: &str = "logging.googleapis.com";
/// Mutual TLS host of the logging API in the default universe.
pub const DEFAULT_MTLS_ENDPOINT: &str = "logging.mtls.googleapis.com";
/// The default universe domain.
pub const DEFAULT_UNIVERSE: &str = "googleapis.com";
const ENDPOINT_TEMPLATE: &str = "logging.{UNIVERSE_DOMAIN}";

/// Whether to present a client certificate, `true` or `false`.
pub const GOOGLE_API_USE_CLIENT_CERTIFICATE: &str = "GOOGLE_API_USE_CLIENT_CERTIFICATE";
/// When to use the mTLS endpoint: `never`, `auto` or `always`.
pub const GOOGLE_API_USE_MTLS_ENDPOINT: &str = "GOOGLE_API_USE_MTLS_ENDPOINT";
/// The universe domain to talk to, `googleapis.com` by default.
pub const GOOGLE_CLOUD_UNIVERSE_DOMAIN: &str = "GOOGLE_CLOUD_UNIVERSE_DOMAIN";
/// The project used by the convenience client when none is configured.
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";

/// OAuth scopes requested when none are configured.
pub const DEFAULT_SCOPES: [&str; 5] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/cloud-platform.read-only",
    "https://www.googleapis.com/auth/logging.admin",
    "https://www.googleapis.com/auth/logging.read",
    "https://www.googleapis.com/auth/logging.write",
];

const CLIENT_LIBRARY: &str = concat!("gl-rust gccl/", env!("CARGO_PKG_VERSION"));
const USER_AGENT: &str = concat!("cloud-logging-rust/", env!("CARGO_PKG_VERSION"));

/// When to talk to the mutual TLS endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MtlsEndpointMode {
    Never,
    /// Use the mTLS endpoint only when a client certificate is available.
    #[default]
    Auto,
    Always,
}

impl MtlsEndpointMode {
    fn from_env() -> Result<Option<Self>> {
        match std::env::var(GOOGLE_API_USE_MTLS_ENDPOINT) {
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "never" => Ok(Some(MtlsEndpointMode::Never)),
                "auto" => Ok(Some(MtlsEndpointMode::Auto)),
                "always" => Ok(Some(MtlsEndpointMode::Always)),
                _ => Err(Error::Config(
                    "Environment variable `GOOGLE_API_USE_MTLS_ENDPOINT` must be `never`, `auto` or `always`"
                        .into(),
                )),
            },
            Err(_) => Ok(None),
        }
    }
}

fn use_client_certificate_from_env() -> Result<Option<bool>> {
    match std::env::var(GOOGLE_API_USE_CLIENT_CERTIFICATE) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(Error::Config(
                "Environment variable `GOOGLE_API_USE_CLIENT_CERTIFICATE` must be either `true` or `false`"
                    .into(),
            )),
        },
        Err(_) => Ok(None),
    }
}

/// The wire protocol used to reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    /// Protobuf over HTTP/2.
    #[default]
    Grpc,
    /// JSON over HTTP/1.1, transcoded from each RPC's HTTP binding.
    Rest,
}

/// A PEM encoded client certificate and its private key.
#[derive(Clone)]
pub struct ClientCertificate {
    pub(crate) cert_pem: Vec<u8>,
    pub(crate) key_pem: Vec<u8>,
}

impl ClientCertificate {
    pub fn from_pem(cert_pem: impl Into<Vec<u8>>, key_pem: impl Into<Vec<u8>>) -> Self {
        ClientCertificate {
            cert_pem: cert_pem.into(),
            key_pem: key_pem.into(),
        }
    }
}

impl fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCertificate")
            .field("cert_pem_len", &self.cert_pem.len())
            .finish_non_exhaustive()
    }
}

/// Derives the mTLS variant of a Google API host.
///
/// `name.googleapis.com` becomes `name.mtls.googleapis.com` and
/// `name.sandbox.googleapis.com` becomes `name.mtls.sandbox.googleapis.com`.
/// Hosts that already point at an mTLS endpoint, and hosts outside
/// `googleapis.com`, are returned unchanged.
pub fn mtls_endpoint(endpoint: &str) -> String {
    match endpoint.split_once('.') {
        Some((name, "googleapis.com")) if !name.is_empty() => {
            format!("{name}.mtls.googleapis.com")
        }
        Some((name, "sandbox.googleapis.com")) if !name.is_empty() => {
            format!("{name}.mtls.sandbox.googleapis.com")
        }
        _ => endpoint.to_string(),
    }
}

/// Picks the endpoint from the override, the mTLS mode and certificate
/// availability. The override always wins.
fn select_endpoint(
    endpoint_override: Option<&str>,
    mode: MtlsEndpointMode,
    client_cert_available: bool,
    universe_domain: &str,
) -> Result<String> {
    if let Some(endpoint) = endpoint_override {
        return Ok(endpoint.to_string());
    }
    let use_mtls = match mode {
        MtlsEndpointMode::Always => true,
        MtlsEndpointMode::Never => false,
        MtlsEndpointMode::Auto => client_cert_available,
    };
    if use_mtls {
        if universe_domain != DEFAULT_UNIVERSE {
            return Err(Error::Config(
                "mTLS is not supported in any universe other than googleapis.com.".into(),
            ));
        }
        return Ok(mtls_endpoint(DEFAULT_ENDPOINT));
    }
    Ok(ENDPOINT_TEMPLATE.replace("{UNIVERSE_DOMAIN}", universe_domain))
}

/// Immutable configuration resolved by [`ClientBuilder::build`].
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) endpoint: String,
    pub(crate) universe_domain: String,
    pub(crate) client_certificate: Option<ClientCertificate>,
    pub(crate) transport_kind: TransportKind,
    pub(crate) credentials: CredentialsSource,
    pub(crate) scopes: Vec<String>,
    pub(crate) api_key: Option<String>,
    pub(crate) quota_project: Option<String>,
    pub(crate) project: Option<String>,
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) user_agent: String,
    #[cfg(feature = "rest")]
    pub(crate) http_client: Option<Arc<dyn HttpClient>>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("universe_domain", &self.universe_domain)
            .field("client_certificate", &self.client_certificate)
            .field("transport_kind", &self.transport_kind)
            .field("credentials", &self.credentials)
            .field("scopes", &self.scopes)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("quota_project", &self.quota_project)
            .field("project", &self.project)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// The host, or full URL, requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn universe_domain(&self) -> &str {
        &self.universe_domain
    }

    /// Whether a client certificate will be presented.
    pub fn uses_client_certificate(&self) -> bool {
        self.client_certificate.is_some()
    }

    pub fn transport_kind(&self) -> TransportKind {
        self.transport_kind
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn quota_project(&self) -> Option<&str> {
        self.quota_project.as_deref()
    }

    /// The project configured on the builder or taken from
    /// `GOOGLE_CLOUD_PROJECT`.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The `x-goog-api-client` header value.
    pub fn api_client_header(&self) -> &'static str {
        CLIENT_LIBRARY
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Base URL for the given default scheme. Endpoints that already carry a
    /// scheme, such as a local emulator, are used as is.
    pub(crate) fn base_url(&self, default_scheme: &str) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.trim_end_matches('/').to_string()
        } else {
            format!("{default_scheme}://{}", self.endpoint.trim_end_matches('/'))
        }
    }
}

/// Builder for a [`Connection`], the shared state behind every service client.
///
/// ```no_run
/// # async fn run() -> cloud_logging::Result<()> {
/// use cloud_logging::{ClientBuilder, LoggingServiceV2Client};
///
/// let connection = ClientBuilder::new().with_quota_project("billing-project").build()?;
/// let client = LoggingServiceV2Client::new(connection);
/// let logs = client.list_logs().parent("projects/my-project").paginate().await?;
/// # let _ = logs;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder<T = DefaultTransport> {
    endpoint: Option<String>,
    universe_domain: Option<String>,
    mtls_mode: Option<MtlsEndpointMode>,
    use_client_certificate: Option<bool>,
    client_certificate: Option<ClientCertificate>,
    transport_kind: Option<TransportKind>,
    transport: Option<T>,
    credentials: Option<Credentials>,
    credentials_file: Option<PathBuf>,
    scopes: Option<Vec<String>>,
    api_key: Option<String>,
    quota_project: Option<String>,
    project: Option<String>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    #[cfg(feature = "rest")]
    http_client: Option<Arc<dyn HttpClient>>,
}

impl Default for ClientBuilder<DefaultTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder<DefaultTransport> {
    pub fn new() -> Self {
        ClientBuilder {
            endpoint: None,
            universe_domain: None,
            mtls_mode: None,
            use_client_certificate: None,
            client_certificate: None,
            transport_kind: None,
            transport: None,
            credentials: None,
            credentials_file: None,
            scopes: None,
            api_key: None,
            quota_project: None,
            project: None,
            connect_timeout: None,
            user_agent: None,
            #[cfg(feature = "rest")]
            http_client: None,
        }
    }
}

impl<T> fmt::Debug for ClientBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("endpoint", &self.endpoint)
            .field("universe_domain", &self.universe_domain)
            .field("mtls_mode", &self.mtls_mode)
            .field("transport_kind", &self.transport_kind)
            .field("has_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> ClientBuilder<T> {
    /// Overrides the endpoint. Takes precedence over mTLS and universe
    /// resolution.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_universe_domain(mut self, domain: impl Into<String>) -> Self {
        self.universe_domain = Some(domain.into());
        self
    }

    /// Overrides `GOOGLE_API_USE_MTLS_ENDPOINT`.
    pub fn with_mtls_endpoint_mode(mut self, mode: MtlsEndpointMode) -> Self {
        self.mtls_mode = Some(mode);
        self
    }

    /// Overrides `GOOGLE_API_USE_CLIENT_CERTIFICATE`.
    pub fn with_client_certificate_enabled(mut self, enabled: bool) -> Self {
        self.use_client_certificate = Some(enabled);
        self
    }

    /// The certificate to present when client certificates are enabled.
    pub fn with_client_certificate(mut self, certificate: ClientCertificate) -> Self {
        self.client_certificate = Some(certificate);
        self
    }

    pub fn with_transport_kind(mut self, kind: TransportKind) -> Self {
        self.transport_kind = Some(kind);
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Loads a service account key file when the client first connects.
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Authenticates with an API key instead of OAuth credentials.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The project billed for quota, sent as `x-goog-user-project`.
    pub fn with_quota_project(mut self, project: impl Into<String>) -> Self {
        self.quota_project = Some(project.into());
        self
    }

    /// The default project of the convenience client.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Prepended to the library's own `user-agent`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The HTTP client used by the REST transport.
    #[cfg(feature = "rest")]
    pub fn with_http_client<C: HttpClient + 'static>(mut self, client: C) -> Self {
        self.http_client = Some(Arc::new(client));
        self
    }

    /// Uses an already constructed transport. Its credentials and scopes are
    /// its own business, so they cannot be configured here as well.
    pub fn with_transport<U: Transport>(self, transport: U) -> ClientBuilder<U> {
        ClientBuilder {
            endpoint: self.endpoint,
            universe_domain: self.universe_domain,
            mtls_mode: self.mtls_mode,
            use_client_certificate: self.use_client_certificate,
            client_certificate: self.client_certificate,
            transport_kind: self.transport_kind,
            transport: Some(transport),
            credentials: self.credentials,
            credentials_file: self.credentials_file,
            scopes: self.scopes,
            api_key: self.api_key,
            quota_project: self.quota_project,
            project: self.project,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent,
            #[cfg(feature = "rest")]
            http_client: self.http_client,
        }
    }

    fn check_conflicts(&self) -> Result<()> {
        if self.transport.is_some() {
            if self.credentials.is_some() || self.credentials_file.is_some() || self.api_key.is_some() {
                return Err(Error::InvalidArgument(
                    "When providing a transport instance, provide its credentials directly.".into(),
                ));
            }
            if self.scopes.is_some() {
                return Err(Error::InvalidArgument(
                    "When providing a transport instance, provide its scopes directly.".into(),
                ));
            }
        }
        if self.credentials.is_some() && self.credentials_file.is_some() {
            return Err(Error::InvalidArgument(
                "'credentials_file' and 'credentials' are mutually exclusive".into(),
            ));
        }
        if self.api_key.is_some() && (self.credentials.is_some() || self.credentials_file.is_some()) {
            return Err(Error::InvalidArgument(
                "client_options.api_key and credentials are mutually exclusive".into(),
            ));
        }
        Ok(())
    }

    fn resolve(&self) -> Result<ClientConfig> {
        self.check_conflicts()?;

        let universe_domain = match &self.universe_domain {
            Some(domain) => domain.clone(),
            None => std::env::var(GOOGLE_CLOUD_UNIVERSE_DOMAIN)
                .unwrap_or_else(|_| DEFAULT_UNIVERSE.to_string()),
        };
        if universe_domain.trim().is_empty() {
            return Err(Error::Config(
                "Universe Domain cannot be an empty string.".into(),
            ));
        }

        let use_client_certificate = match self.use_client_certificate {
            Some(enabled) => enabled,
            None => use_client_certificate_from_env()?.unwrap_or(false),
        };
        let mtls_mode = match self.mtls_mode {
            Some(mode) => mode,
            None => MtlsEndpointMode::from_env()?.unwrap_or_default(),
        };
        let client_certificate = if use_client_certificate {
            self.client_certificate.clone()
        } else {
            None
        };
        let endpoint = select_endpoint(
            self.endpoint.as_deref(),
            mtls_mode,
            client_certificate.is_some(),
            &universe_domain,
        )?;

        let credentials = match (&self.credentials, &self.credentials_file, &self.api_key) {
            (Some(credentials), _, _) => CredentialsSource::Explicit(credentials.clone()),
            (None, Some(path), _) => CredentialsSource::File(path.clone()),
            (None, None, Some(_)) => CredentialsSource::Explicit(Credentials::Anonymous),
            (None, None, None) => CredentialsSource::ApplicationDefault,
        };
        let scopes = self
            .scopes
            .clone()
            .unwrap_or_else(|| DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect());
        let project = self
            .project
            .clone()
            .or_else(|| std::env::var(GOOGLE_CLOUD_PROJECT).ok())
            .filter(|p| !p.is_empty());
        let user_agent = match &self.user_agent {
            Some(prefix) => format!("{prefix} {USER_AGENT}"),
            None => USER_AGENT.to_string(),
        };

        Ok(ClientConfig {
            endpoint,
            universe_domain,
            client_certificate,
            transport_kind: self.transport_kind.unwrap_or_default(),
            credentials,
            scopes,
            api_key: self.api_key.clone(),
            quota_project: self.quota_project.clone(),
            project,
            connect_timeout: self.connect_timeout,
            user_agent,
            #[cfg(feature = "rest")]
            http_client: self.http_client.clone(),
        })
    }

    /// Validates the options and resolves the configuration.
    ///
    /// Nothing is dialed here: the transport is created on the first call
    /// made through the returned connection.
    pub fn build(self) -> Result<Connection<T>> {
        let config = self.resolve()?;
        Ok(Connection::new(config, self.transport))
    }
}
