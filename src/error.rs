//! Error types surfaced by the token exchange.
//!
//! [`Error`] keeps the four failure outcomes of a token request distinguishable:
//! [`Error::Transport`] when the server could not be reached, [`Error::HttpStatus`] when it
//! answered with a failure status, [`Error::Decode`] when the body was not valid JSON, and
//! [`Error::MissingField`] when the JSON lacked `access_token`. [`Error::Config`] covers
//! problems caught locally before any request is sent.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem detected before any network I/O.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Token endpoint was reachable but answered with a non-success status.
	#[error("Token endpoint responded with HTTP {status}: {body}.")]
	HttpStatus {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body, decoded lossily as UTF-8.
		body: String,
	},
	/// Token endpoint responded with a body that is not the expected JSON document.
	#[error("Token endpoint returned malformed JSON at `{path}`.")]
	Decode {
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
		/// JSON path at which decoding stopped (`.` for the document root).
		path: String,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token endpoint returned well-formed JSON without the required field.
	#[error("Token endpoint response is missing the `{field}` field.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
}
impl Error {
	/// Returns the HTTP status code tied to this error, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before a request is dispatched.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Token endpoint base URL cannot be parsed.
	#[error("Token endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token endpoint base URL cannot carry a path (e.g. `mailto:` or `data:` URLs).
	#[error("Token endpoint URL `{url}` cannot be used as a base URL.")]
	UnusableEndpoint {
		/// Offending URL.
		url: String,
	},
	/// Cognito domain component failed validation.
	#[error("Cognito {component} `{value}` is invalid.")]
	InvalidDomain {
		/// Domain component label (`domain prefix` or `region`).
		component: &'static str,
		/// Rejected value.
		value: String,
	},

	/// A credential half was empty.
	#[error("Client {field} cannot be empty.")]
	EmptyCredential {
		/// Credential field label (`id` or `secret`).
		field: &'static str,
	},
	/// Request timeout cannot be represented by the transport.
	#[error("The request timeout must be positive.")]
	NonPositiveTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request did not complete within the configured timeout.
	#[error("Request timed out while calling the token endpoint.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport failed with a message-only error.
	#[error("HTTP client error occurred while calling the token endpoint: {0}.")]
	Other(String),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}
