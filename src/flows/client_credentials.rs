//! Client Credentials exchange.
//!
//! [`TokenFetcher::fetch_token`] sends one `grant_type=client_credentials` request and returns
//! the `access_token` from the response. There is no cache and no retry: each call hits the
//! token endpoint exactly once and every failure goes straight back to the caller.

// crates.io
use oauth2::AsyncHttpClient;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ClientCredentials, IssuedToken},
	flows::TokenFetcher,
	http::TokenHttpClient,
	oauth,
	obs::{self, FetchOutcome, FetchSpan},
};
#[cfg(feature = "reqwest")] use crate::endpoint::TokenEndpoint;

impl<C> TokenFetcher<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Performs the `client_credentials` grant and returns the access token verbatim.
	pub async fn fetch_token(&self, credentials: &ClientCredentials) -> Result<AccessToken> {
		self.exchange(credentials, "fetch_token").await.map(|issued| issued.access_token)
	}

	/// Performs the `client_credentials` grant and also reports `token_type`/`expires_in`.
	pub async fn fetch_token_response(
		&self,
		credentials: &ClientCredentials,
	) -> Result<IssuedToken> {
		self.exchange(credentials, "fetch_token_response").await
	}

	async fn exchange(
		&self,
		credentials: &ClientCredentials,
		stage: &'static str,
	) -> Result<IssuedToken> {
		let span = FetchSpan::new(stage);

		obs::record_fetch_outcome(FetchOutcome::Attempt, None);

		let result = span
			.instrument(async move {
				let request = oauth::build_token_request(&self.endpoint, credentials)?;
				let handle = self.http_client.handle();
				let response = handle
					.call(request)
					.await
					.map_err(|err| self.http_client.map_transport_error(err))?;

				obs::trace_response(response.status().as_u16());

				oauth::decode_token_response(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_fetch_outcome(FetchOutcome::Success, None),
			Err(err) => {
				obs::trace_failure(err);
				obs::record_fetch_outcome(FetchOutcome::Failure, Some(err));
			}
		}

		result
	}
}

/// Exchanges `client_id`/`client_secret` for an access token at `{token_url}/oauth2/token`.
///
/// Convenience wrapper that validates its inputs and runs a single request through a fresh
/// [`TokenFetcher`] with the default reqwest transport.
#[cfg(feature = "reqwest")]
pub async fn fetch_token(
	client_id: &str,
	client_secret: &str,
	token_url: &str,
) -> Result<AccessToken> {
	let credentials = ClientCredentials::new(client_id, client_secret)?;
	let endpoint = TokenEndpoint::parse(token_url)?;

	TokenFetcher::new(endpoint)?.fetch_token(&credentials).await
}
