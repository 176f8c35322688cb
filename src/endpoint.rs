//! Token endpoint addressing.
//!
//! Callers supply the authorization server's base URL and [`TokenEndpoint`] appends the fixed
//! `/oauth2/token` path. [`CognitoDomain`] derives that base URL from a Cognito hosted-domain
//! prefix and AWS region.

// self
use crate::{_prelude::*, error::ConfigError};

/// Validated token endpoint derived from an authorization server base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEndpoint {
	base: Url,
	token: Url,
}
impl TokenEndpoint {
	/// Path appended to the base URL.
	pub const TOKEN_PATH: &'static str = "/oauth2/token";

	/// Builds the endpoint from an already-parsed base URL.
	///
	/// A trailing slash on the base is dropped before the token path is appended, and any
	/// query or fragment is discarded.
	pub fn new(base: Url) -> Result<Self, ConfigError> {
		let mut token = base.clone();

		token.set_query(None);
		token.set_fragment(None);
		token
			.path_segments_mut()
			.map_err(|_| ConfigError::UnusableEndpoint { url: base.to_string() })?
			.pop_if_empty()
			.extend(["oauth2", "token"]);

		Ok(Self { base, token })
	}

	/// Parses a base URL string and builds the endpoint.
	pub fn parse(base: &str) -> Result<Self, ConfigError> {
		let base = Url::parse(base).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Self::new(base)
	}

	/// Base URL the endpoint was built from.
	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Full token URL (`{base}/oauth2/token`).
	pub fn token_url(&self) -> &Url {
		&self.token
	}
}
impl FromStr for TokenEndpoint {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Display for TokenEndpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.token.as_str())
	}
}

/// Cognito hosted domain, addressed as `https://{prefix}.auth.{region}.amazoncognito.com`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CognitoDomain {
	prefix: String,
	region: String,
}
impl CognitoDomain {
	/// Creates a domain after checking both components are lowercase DNS labels.
	pub fn new(prefix: impl Into<String>, region: impl Into<String>) -> Result<Self, ConfigError> {
		let prefix = prefix.into();
		let region = region.into();

		validate_label("domain prefix", &prefix)?;
		validate_label("region", &region)?;

		Ok(Self { prefix, region })
	}

	/// Domain prefix chosen for the user pool.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// AWS region hosting the user pool.
	pub fn region(&self) -> &str {
		&self.region
	}

	/// Base URL of the hosted domain.
	pub fn base_url(&self) -> Result<Url, ConfigError> {
		Url::parse(&format!("https://{}.auth.{}.amazoncognito.com", self.prefix, self.region))
			.map_err(|source| ConfigError::InvalidEndpoint { source })
	}

	/// Token endpoint of the hosted domain.
	pub fn token_endpoint(&self) -> Result<TokenEndpoint, ConfigError> {
		TokenEndpoint::new(self.base_url()?)
	}
}

fn validate_label(component: &'static str, value: &str) -> Result<(), ConfigError> {
	let valid = !value.is_empty()
		&& !value.starts_with('-')
		&& !value.ends_with('-')
		&& value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

	if !valid {
		return Err(ConfigError::InvalidDomain { component, value: value.into() });
	}

	Ok(())
}
