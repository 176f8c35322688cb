//! Confidential client credentials and their HTTP Basic encoding.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use oauth2::{ClientId, ClientSecret};
// self
use crate::{_prelude::*, error::ConfigError};

/// Client id/secret pair assigned to a confidential app client.
///
/// Both halves are validated as non-empty on construction. The secret never appears in
/// `Debug` output.
#[derive(Clone)]
pub struct ClientCredentials {
	client_id: ClientId,
	client_secret: ClientSecret,
}
impl ClientCredentials {
	/// Creates a credential pair after rejecting empty values.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let client_id = client_id.into();
		let client_secret = client_secret.into();

		if client_id.is_empty() {
			return Err(ConfigError::EmptyCredential { field: "id" });
		}
		if client_secret.is_empty() {
			return Err(ConfigError::EmptyCredential { field: "secret" });
		}

		Ok(Self {
			client_id: ClientId::new(client_id),
			client_secret: ClientSecret::new(client_secret),
		})
	}

	/// Returns the client identifier.
	pub fn client_id(&self) -> &str {
		self.client_id.as_str()
	}

	/// Returns the client secret. Callers must avoid logging this string.
	pub fn client_secret(&self) -> &str {
		self.client_secret.secret()
	}

	/// Builds the `Authorization` header value: `Basic base64(client_id:client_secret)`.
	///
	/// The id and secret are joined verbatim, without form-encoding either half first.
	pub fn basic_authorization(&self) -> String {
		let raw = format!("{}:{}", self.client_id(), self.client_secret());

		format!("Basic {}", STANDARD.encode(raw))
	}
}
impl Debug for ClientCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientCredentials")
			.field("client_id", &self.client_id())
			.field("client_secret", &"<redacted>")
			.finish()
	}
}
impl Display for ClientCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}:<redacted>", self.client_id())
	}
}
