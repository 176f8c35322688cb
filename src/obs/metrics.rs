// self
use crate::{_prelude::*, obs::FetchOutcome};

/// Records an exchange outcome via the global metrics recorder (when enabled).
///
/// `error` is only consulted for [`FetchOutcome::Failure`].
pub fn record_fetch_outcome(outcome: FetchOutcome, error: Option<&Error>) {
	#[cfg(feature = "metrics")]
	{
		match error.filter(|_| outcome == FetchOutcome::Failure) {
			Some(err) => metrics::counter!(
				"cognito_token_fetch_total",
				"outcome" => outcome.as_str(),
				"kind" => crate::obs::failure_kind(err)
			)
			.increment(1),
			None =>
				metrics::counter!("cognito_token_fetch_total", "outcome" => outcome.as_str())
					.increment(1),
		}
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (outcome, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_fetch_outcome_without_recorder_is_noop() {
		let err = Error::MissingField { field: "access_token" };

		record_fetch_outcome(FetchOutcome::Attempt, None);
		record_fetch_outcome(FetchOutcome::Failure, Some(&err));
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn counters_carry_outcome_and_failure_kind_labels() {
		// crates.io
		use metrics_util::debugging::{DebugValue, DebuggingRecorder};

		let recorder = DebuggingRecorder::new();
		let snapshotter = recorder.snapshotter();
		let err = Error::HttpStatus { status: 401, body: String::new() };

		metrics::with_local_recorder(&recorder, || {
			record_fetch_outcome(FetchOutcome::Attempt, None);
			record_fetch_outcome(FetchOutcome::Attempt, None);
			record_fetch_outcome(FetchOutcome::Success, None);
			record_fetch_outcome(FetchOutcome::Failure, Some(&err));
		});

		let mut counters = snapshotter
			.snapshot()
			.into_vec()
			.into_iter()
			.map(|(key, _, _, value)| {
				let key = key.key();
				let labels = key
					.labels()
					.map(|label| format!("{}={}", label.key(), label.value()))
					.collect::<Vec<_>>()
					.join(",");
				let count = match value {
					DebugValue::Counter(count) => count,
					other => panic!("Unexpected metric value: {other:?}."),
				};

				(key.name().to_owned(), labels, count)
			})
			.collect::<Vec<_>>();

		counters.sort();

		assert_eq!(
			counters,
			vec![
				("cognito_token_fetch_total".to_owned(), "outcome=attempt".to_owned(), 2),
				(
					"cognito_token_fetch_total".to_owned(),
					"outcome=failure,kind=http_status".to_owned(),
					1
				),
				("cognito_token_fetch_total".to_owned(), "outcome=success".to_owned(), 1),
			]
		);
	}
}
