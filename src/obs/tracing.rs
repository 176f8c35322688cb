// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFetch<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFetch<F> = F;

/// A span builder used around token exchanges.
#[derive(Clone, Debug)]
pub struct FetchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FetchSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("cognito_token.fetch", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFetch<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event once the token endpoint answered.
pub fn trace_response(status: u16) {
	#[cfg(feature = "tracing")]
	tracing::debug!(status, "Token endpoint responded.");

	#[cfg(not(feature = "tracing"))]
	let _ = status;
}

/// Emits a warning describing a failed exchange.
pub fn trace_failure(error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(
		kind = crate::obs::failure_kind(error),
		status = error.status(),
		"Token request failed: {error}"
	);

	#[cfg(not(feature = "tracing"))]
	let _ = error;
}
