//! Wire codec for the `client_credentials` token request.
//!
//! [`build_token_request`] produces the exact request the token endpoint receives and
//! [`decode_token_response`] turns the raw response into an [`IssuedToken`] or one of the
//! response-side [`Error`] variants. Both are pure so transports stay trivial.

pub use oauth2;

// crates.io
use oauth2::{
	HttpRequest, HttpResponse,
	http::{
		Method, Request,
		header::{AUTHORIZATION, CONTENT_TYPE},
	},
};
use serde_json::{Deserializer, Value};
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ClientCredentials, IssuedToken},
	endpoint::TokenEndpoint,
	error::ConfigError,
};

/// Grant type sent with every request.
pub const GRANT_TYPE: &str = "client_credentials";
/// Media type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Builds the token request for `credentials` against `endpoint`.
///
/// The credentials travel twice: once as `Authorization: Basic ...` and once as
/// `client_id`/`client_secret` form fields after `grant_type=client_credentials`.
pub fn build_token_request(
	endpoint: &TokenEndpoint,
	credentials: &ClientCredentials,
) -> Result<HttpRequest> {
	let body = Serializer::new(String::new())
		.append_pair("grant_type", GRANT_TYPE)
		.append_pair("client_id", credentials.client_id())
		.append_pair("client_secret", credentials.client_secret())
		.finish();

	Request::builder()
		.method(Method::POST)
		.uri(endpoint.token_url().as_str())
		.header(AUTHORIZATION, credentials.basic_authorization())
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.body(body.into_bytes())
		.map_err(|e| ConfigError::from(e).into())
}

/// Interprets a token endpoint response.
///
/// Failure statuses are reported before the body is looked at. A success body must be valid
/// JSON; any document without a non-empty `access_token` (including non-object documents) is a
/// missing field, while a non-string `access_token` is a decode failure. `token_type` and
/// `expires_in` are picked up when present and usable.
pub fn decode_token_response(response: &HttpResponse) -> Result<IssuedToken> {
	let status = response.status();

	if !status.is_success() {
		return Err(Error::HttpStatus {
			status: status.as_u16(),
			body: String::from_utf8_lossy(response.body()).into_owned(),
		});
	}

	let status = status.as_u16();
	let mut de = Deserializer::from_slice(response.body());
	let document: Value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
		let path = e.path().to_string();

		Error::Decode { source: e.into_inner(), path, status }
	})?;

	de.end().map_err(|source| Error::Decode { source, path: ".".into(), status })?;

	let access_token = match document.get(ACCESS_TOKEN_FIELD) {
		None | Some(Value::Null) => None,
		Some(value) => Some(String::deserialize(value).map_err(|source| Error::Decode {
			source,
			path: ACCESS_TOKEN_FIELD.into(),
			status,
		})?),
	}
	.filter(|token| !token.is_empty())
	.ok_or(Error::MissingField { field: ACCESS_TOKEN_FIELD })?;

	Ok(IssuedToken {
		access_token: AccessToken::new(access_token),
		// Optional fields stay loosely typed so an odd encoding never fails the exchange.
		token_type: document.get("token_type").and_then(Value::as_str).map(ToOwned::to_owned),
		expires_in: document.get("expires_in").and_then(parse_expires_in),
		issued_at: OffsetDateTime::now_utc(),
	})
}

fn parse_expires_in(value: &Value) -> Option<Duration> {
	let secs = match value {
		Value::Number(number) => number.as_i64()?,
		Value::String(raw) => raw.trim().parse().ok()?,
		_ => return None,
	};

	(secs > 0).then_some(Duration::seconds(secs))
}

#[cfg(test)]
mod tests {
	// crates.io
	use base64::{Engine, engine::general_purpose::STANDARD};
	use oauth2::http::StatusCode;
	// self
	use super::*;

	fn credentials() -> ClientCredentials {
		ClientCredentials::new("test-client-id", "test-client-secret")
			.expect("Test credentials should build.")
	}

	fn endpoint() -> TokenEndpoint {
		TokenEndpoint::parse("https://auth.example.com").expect("Test endpoint should parse.")
	}

	fn response(status: u16, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() =
			StatusCode::from_u16(status).expect("Test status code should be valid.");

		response
	}

	fn form_fields(request: &HttpRequest) -> Vec<(String, String)> {
		url::form_urlencoded::parse(request.body()).into_owned().collect()
	}

	#[test]
	fn request_carries_basic_header_and_form_body() {
		let request = build_token_request(&endpoint(), &credentials())
			.expect("Token request should build.");
		let authorization = request
			.headers()
			.get(AUTHORIZATION)
			.and_then(|value| value.to_str().ok())
			.expect("Authorization header should be present.");
		let decoded = STANDARD
			.decode(authorization.strip_prefix("Basic ").expect("Basic scheme expected."))
			.expect("Authorization payload should be base64.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://auth.example.com/oauth2/token");
		assert_eq!(decoded, b"test-client-id:test-client-secret");
		assert_eq!(
			request.headers().get(CONTENT_TYPE).map(|value| value.as_bytes()),
			Some(FORM_CONTENT_TYPE.as_bytes())
		);
		assert_eq!(
			request.body().as_slice(),
			b"grant_type=client_credentials&client_id=test-client-id&client_secret=test-client-secret"
		);
	}

	#[test]
	fn form_body_has_exactly_three_fields_and_encodes_reserved_characters() {
		let credentials = ClientCredentials::new("svc id", "s&cret=+").expect("Should build.");
		let request =
			build_token_request(&endpoint(), &credentials).expect("Token request should build.");

		assert_eq!(
			form_fields(&request),
			vec![
				("grant_type".to_owned(), "client_credentials".to_owned()),
				("client_id".to_owned(), "svc id".to_owned()),
				("client_secret".to_owned(), "s&cret=+".to_owned()),
			]
		);
	}

	#[test]
	fn repeated_builds_are_identical() {
		let first = build_token_request(&endpoint(), &credentials()).expect("Should build.");
		let second = build_token_request(&endpoint(), &credentials()).expect("Should build.");

		assert_eq!(first.method(), second.method());
		assert_eq!(first.uri(), second.uri());
		assert_eq!(first.headers(), second.headers());
		assert_eq!(first.body(), second.body());
	}

	#[test]
	fn success_returns_access_token_verbatim() {
		let issued = decode_token_response(&response(
			200,
			"{\"access_token\":\"abc123\",\"token_type\":\"Bearer\",\"expires_in\":3600}",
		))
		.expect("Valid token response should decode.");

		assert_eq!(issued.access_token.expose(), "abc123");
		assert_eq!(issued.token_type.as_deref(), Some("Bearer"));
		assert_eq!(issued.expires_in, Some(Duration::seconds(3_600)));
	}

	#[test]
	fn optional_fields_never_fail_the_exchange() {
		let issued = decode_token_response(&response(
			200,
			"{\"access_token\":\"abc123\",\"token_type\":7,\"expires_in\":\"soon\",\"scope\":\"a b\"}",
		))
		.expect("Odd optional fields should be ignored.");

		assert_eq!(issued.access_token.expose(), "abc123");
		assert_eq!(issued.token_type, None);
		assert_eq!(issued.expires_in, None);

		let issued = decode_token_response(&response(
			200,
			"{\"access_token\":\"abc123\",\"expires_in\":\"900\"}",
		))
		.expect("String expires_in should decode.");

		assert_eq!(issued.expires_in, Some(Duration::seconds(900)));
	}

	#[test]
	fn failure_status_skips_body_parsing() {
		let err = decode_token_response(&response(401, "{\"error\":\"invalid_client\"}"))
			.expect_err("401 should fail.");

		assert!(matches!(
			err,
			Error::HttpStatus { status: 401, ref body } if body == "{\"error\":\"invalid_client\"}"
		));

		let err = decode_token_response(&response(503, "<html>down</html>"))
			.expect_err("503 should fail.");

		assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
	}

	#[test]
	fn malformed_json_is_a_decode_error() {
		for body in ["not json", "", "{\"access_token\":\"abc\"} trailing"] {
			let err = decode_token_response(&response(200, body))
				.expect_err("Malformed body should fail.");

			assert!(matches!(err, Error::Decode { status: 200, .. }), "body: {body:?}");
		}

		for body in ["{\"access_token\":42}", "{\"access_token\":[\"abc\"]}"] {
			let err = decode_token_response(&response(200, body))
				.expect_err("Non-string token should fail.");

			assert!(
				matches!(err, Error::Decode { ref path, status: 200, .. } if path == "access_token"),
				"body: {body:?}"
			);
		}
	}

	#[test]
	fn absent_or_empty_token_is_a_missing_field() {
		for body in [
			"{\"token_type\":\"Bearer\"}",
			"{\"access_token\":\"\"}",
			"{\"access_token\":null}",
			"{}",
			"[]",
			"null",
			"42",
			"\"tok\"",
		] {
			let err = decode_token_response(&response(200, body))
				.expect_err("Token-less body should fail.");

			assert!(matches!(err, Error::MissingField { field: "access_token" }), "body: {body:?}");
		}
	}
}
