//! Access token wrapper and the optional metadata issued alongside it.

// self
use crate::_prelude::*;

/// Redacted bearer token wrapper keeping sensitive material out of logs.
///
/// The value is kept exactly as the token endpoint returned it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the raw token.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Access token plus the optional standard fields returned with it.
///
/// Nothing here is validated or persisted; `expires_in` is reported as-is so callers can decide
/// what to do with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedToken {
	/// Bearer credential returned by the token endpoint.
	pub access_token: AccessToken,
	/// `token_type` field, typically `Bearer`.
	pub token_type: Option<String>,
	/// Lifetime advertised through `expires_in`.
	pub expires_in: Option<Duration>,
	/// Local instant at which the response was received.
	pub issued_at: OffsetDateTime,
}
impl IssuedToken {
	/// Returns the advertised expiry instant, when the server sent `expires_in`.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.expires_in.map(|lifetime| self.issued_at + lifetime)
	}
}
