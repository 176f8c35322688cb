//! Exchange Cognito app-client credentials for an OAuth 2.0 access token.
//!
//! The crate performs exactly one `client_credentials` request per call: it sends the client
//! id/secret both as an HTTP Basic `Authorization` header and inside the form body, then hands
//! back the `access_token` from the JSON response. Nothing is cached or retried.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;

pub use auth::{AccessToken, ClientCredentials, IssuedToken};
pub use endpoint::{CognitoDomain, TokenEndpoint};
pub use error::{Error, Result};
#[cfg(feature = "reqwest")] pub use flows::fetch_token;
pub use flows::TokenFetcher;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(feature = "cli")] use {clap as _, color_eyre as _, tokio as _, tracing_subscriber as _};
#[cfg(test)] use {color_eyre as _, httpmock as _, metrics_util as _, tokio as _};
