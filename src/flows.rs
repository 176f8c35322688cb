//! Token exchange orchestration.

mod client_credentials;

#[cfg(feature = "reqwest")] pub use client_credentials::fetch_token;

// self
use crate::{_prelude::*, endpoint::TokenEndpoint, http::TokenHttpClient};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Fetcher specialized for the crate's default reqwest transport.
pub type ReqwestTokenFetcher = TokenFetcher<ReqwestHttpClient>;

/// Exchanges client credentials for access tokens at one token endpoint.
///
/// The fetcher holds nothing but the endpoint and the transport, so every call is an
/// independent request and clones can be used from any number of tasks.
#[derive(Clone)]
pub struct TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Endpoint receiving the token requests.
	pub endpoint: TokenEndpoint,
}
impl<C> TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a fetcher that reuses the caller-provided transport.
	pub fn with_http_client(endpoint: TokenEndpoint, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), endpoint }
	}
}
#[cfg(feature = "reqwest")]
impl TokenFetcher<ReqwestHttpClient> {
	/// Creates a fetcher backed by a redirect-free reqwest client with transport-default
	/// timeouts.
	pub fn new(endpoint: TokenEndpoint) -> Result<Self, ConfigError> {
		Ok(Self::with_http_client(endpoint, ReqwestHttpClient::new(None)?))
	}

	/// Creates a fetcher whose requests give up after `timeout`.
	pub fn with_timeout(endpoint: TokenEndpoint, timeout: Duration) -> Result<Self, ConfigError> {
		Ok(Self::with_http_client(endpoint, ReqwestHttpClient::new(Some(timeout))?))
	}
}
impl<C> Debug for TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenFetcher").field("endpoint", &self.endpoint).finish()
	}
}
