// self
use crate::{_prelude::*, auth::ProviderId, obs::ProfileOutcome};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedProfile<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedProfile<F> = F;

/// Span wrapper used around profile resolution.
#[derive(Clone, Debug)]
pub struct ProfileSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ProfileSpan {
	/// Creates a new span tagged with the provider + stage.
	pub fn new(provider: &ProviderId, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth1_identity.profile",
				provider = provider.as_ref(),
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedProfile<Fut>
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

/// Emits a `warn` event describing a failed resolution (when tracing is enabled).
pub fn log_profile_failure(provider: &ProviderId, outcome: ProfileOutcome, error: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			provider = provider.as_ref(),
			outcome = outcome.as_str(),
			%error,
			"Profile resolution failed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, outcome, error);
	}
}
