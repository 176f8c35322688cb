//! Transport primitives for the token exchange.
//!
//! [`TokenHttpClient`] is the crate's only dependency on an HTTP stack. It hands out
//! [`AsyncHttpClient`] handles from the `oauth2` crate so any transport speaking
//! [`HttpRequest`]/[`HttpResponse`] can be plugged in, and it owns the mapping from its own
//! failures into [`Error`]. [`ReqwestHttpClient`] is the default implementation.

// crates.io
use oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse};
#[cfg(feature = "reqwest")] use reqwest::redirect::Policy;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Abstraction over HTTP transports capable of executing a token request.
///
/// Implementations must be `Send + Sync + 'static` so a [`TokenFetcher`](crate::TokenFetcher)
/// can be shared across tasks, and the request futures produced by their handles must be
/// `Send`.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single exchange.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds a handle that dispatches one request.
	fn handle(&self) -> Self::Handle;

	/// Converts a failure reported by [`Self::Handle`] into a crate [`Error`].
	///
	/// The default keeps every failure in the transport bucket except request construction
	/// problems, which are local configuration errors.
	fn map_transport_error(&self, error: HttpClientError<Self::TransportError>) -> Error {
		map_generic_transport_error(error)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token endpoints answer directly, so the client built by [`ReqwestHttpClient::new`] never
/// follows redirects. Apply the same policy to any client passed to
/// [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled and an optional overall request timeout.
	///
	/// Without a timeout the transport's defaults apply.
	pub fn new(timeout: Option<Duration>) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().redirect(Policy::none());

		if let Some(timeout) = timeout {
			let timeout = std::time::Duration::try_from(timeout)
				.ok()
				.filter(|value| !value.is_zero())
				.ok_or(ConfigError::NonPositiveTimeout)?;

			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(self.0.clone())
	}

	fn map_transport_error(&self, error: HttpClientError<ReqwestError>) -> Error {
		match error {
			HttpClientError::Reqwest(inner) if inner.is_builder() => ConfigError::from(*inner).into(),
			HttpClientError::Reqwest(inner) => TransportError::from(*inner).into(),
			other => map_generic_transport_error(other),
		}
	}
}

/// Handle returned by [`ReqwestHttpClient`] that satisfies [`TokenHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHandle(ReqwestClient);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

fn map_generic_transport_error<E>(error: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match error {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other(message).into(),
		_ => TransportError::Other("unrecognized transport failure".into()).into(),
	}
}
