//! Fetches one Cognito access token and prints it to stdout.
//!
//! Credentials and the endpoint come from flags or the matching environment variables; nothing
//! is embedded in the binary. Logs go to stderr (filter via `RUST_LOG`, default `warn`) so the
//! token stays the only stdout output.

// crates.io
use clap::{ArgGroup, Parser};
use color_eyre::{
	Result,
	eyre::{WrapErr, eyre},
};
use time::Duration;
use tracing_subscriber::EnvFilter;
// self
use cognito_token::{ClientCredentials, CognitoDomain, TokenEndpoint, TokenFetcher};

/// Exchange Cognito app-client credentials for an access token.
#[derive(Parser)]
#[command(name = "cognito-token", version, about)]
#[command(group(ArgGroup::new("endpoint").required(true).args(["token_url", "domain_prefix"])))]
struct Cli {
	/// App client id.
	#[arg(long, env = "COGNITO_CLIENT_ID")]
	client_id: String,
	/// App client secret.
	#[arg(long, env = "COGNITO_CLIENT_SECRET", hide_env_values = true)]
	client_secret: String,
	/// Authorization server base URL; `/oauth2/token` is appended.
	#[arg(long, env = "COGNITO_TOKEN_URL")]
	token_url: Option<TokenEndpoint>,
	/// Cognito hosted-domain prefix, used with `--region` instead of `--token-url`.
	#[arg(long, env = "COGNITO_DOMAIN_PREFIX", requires = "region")]
	domain_prefix: Option<String>,
	/// AWS region of the user pool.
	#[arg(long, env = "AWS_REGION")]
	region: Option<String>,
	/// Give up on the request after this many seconds.
	#[arg(long, env = "COGNITO_TIMEOUT_SECS")]
	timeout_secs: Option<u64>,
}
impl Cli {
	fn endpoint(&self) -> Result<TokenEndpoint> {
		if let Some(endpoint) = &self.token_url {
			return Ok(endpoint.clone());
		}

		let prefix =
			self.domain_prefix.as_deref().ok_or_else(|| eyre!("A token endpoint is required."))?;
		let region = self.region.as_deref().ok_or_else(|| eyre!("A region is required."))?;

		Ok(CognitoDomain::new(prefix, region)?.token_endpoint()?)
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let endpoint = cli.endpoint()?;
	let fetcher = match cli.timeout_secs {
		Some(secs) => TokenFetcher::with_timeout(endpoint, Duration::seconds(i64::try_from(secs)?))?,
		None => TokenFetcher::new(endpoint)?,
	};
	let credentials = ClientCredentials::new(cli.client_id, cli.client_secret)?;

	tracing::debug!(endpoint = %fetcher.endpoint, "Requesting access token.");

	let token =
		fetcher.fetch_token(&credentials).await.wrap_err("Failed to fetch an access token")?;

	println!("{}", token.expose());

	Ok(())
}
