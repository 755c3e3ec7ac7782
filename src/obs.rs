//! Optional observability helpers for profile resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_identity.profile` with the
//!   `provider` and `stage` fields, plus a `warn` event for every failed resolution.
//! - Enable `metrics` to increment the `oauth1_identity_profile_total` counter for every
//!   attempt/outcome, labeled by `provider` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileOutcome {
	/// Entry to the resolver.
	Attempt,
	/// An identity was produced.
	Success,
	/// The provider reported an application-level error.
	SpecifiedError,
	/// Transport, parse, or payload-shape failure.
	UnspecifiedError,
	/// The identity builder rejected the normalized identity.
	BuildFailure,
}
impl ProfileOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProfileOutcome::Attempt => "attempt",
			ProfileOutcome::Success => "success",
			ProfileOutcome::SpecifiedError => "specified_error",
			ProfileOutcome::UnspecifiedError => "unspecified_error",
			ProfileOutcome::BuildFailure => "build_failure",
		}
	}

	/// Classifies a resolver failure.
	pub fn of_error(err: &AuthenticationError) -> Self {
		if err.is_specified() { Self::SpecifiedError } else { Self::UnspecifiedError }
	}
}
impl Display for ProfileOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
