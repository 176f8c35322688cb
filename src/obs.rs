//! Optional observability helpers for token exchanges.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `cognito_token.fetch` with a `stage` (call
//!   site) field, plus debug/warn events describing the outcome. Secrets and tokens are never
//!   recorded.
//! - Enable `metrics` to increment the `cognito_token_fetch_total` counter for every
//!   attempt/success/failure, labeled by `outcome` and, for failures, `kind`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
	/// Entry to the exchange.
	Attempt,
	/// Access token obtained.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FetchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchOutcome::Attempt => "attempt",
			FetchOutcome::Success => "success",
			FetchOutcome::Failure => "failure",
		}
	}
}
impl Display for FetchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Returns a stable label naming the failure class of `error`.
pub fn failure_kind(error: &Error) -> &'static str {
	match error {
		Error::Config(_) => "config",
		Error::Transport(_) => "transport",
		Error::HttpStatus { .. } => "http_status",
		Error::Decode { .. } => "decode",
		Error::MissingField { .. } => "missing_field",
	}
}
