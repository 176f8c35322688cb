//! Demonstrates a single client-credentials exchange against a mock Cognito token endpoint using
//! the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use time::Duration;
// self
use cognito_token::{ClientCredentials, TokenEndpoint, TokenFetcher};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/token").body(
				"grant_type=client_credentials&client_id=demo-client&client_secret=super-secret",
			);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"Bearer\",\"expires_in\":3600}",
			);
		})
		.await;
	let endpoint = TokenEndpoint::parse(&server.base_url())?;
	let fetcher = TokenFetcher::with_timeout(endpoint, Duration::seconds(10))?;
	let credentials = ClientCredentials::new("demo-client", "super-secret")?;
	let issued = fetcher.fetch_token_response(&credentials).await?;

	println!(
		"Access token: {} (expires at {:?}).",
		issued.access_token.expose(),
		issued.expires_at()
	);

	token_mock.assert_async().await;

	Ok(())
}
