// self
use crate::{auth::ProviderId, obs::ProfileOutcome};

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_profile_outcome(provider: &ProviderId, outcome: ProfileOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_identity_profile_total",
			"provider" => provider.to_string(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_profile_outcome_noop_without_metrics() {
		let provider = ProviderId::new("linkedin").expect("Provider fixture should be valid.");

		record_profile_outcome(&provider, ProfileOutcome::UnspecifiedError);
	}
}
