//! Identity post-processing contracts that turn a normalized [`Identity`] into whatever the
//! host application wants to hand out.

// self
use crate::{_prelude::*, auth::Identity};

/// Boxed future returned by [`IdentityBuilder::build`].
pub type IdentityFuture<'a, Output, Error> =
	Pin<Box<dyn Future<Output = Result<Output, Error>> + 'a + Send>>;

/// Final step of profile resolution; receives the normalized identity and produces the
/// caller-facing value.
///
/// Failures are returned to the caller exactly as produced. `Error` must also absorb
/// [`AuthenticationError`] so resolver failures share the same result type.
pub trait IdentityBuilder
where
	Self: Send + Sync,
{
	/// Caller-facing identity value.
	type Output: Send;
	/// Error surfaced by the builder and by the resolver in front of it.
	type Error: From<AuthenticationError> + Send;

	/// Wraps `identity` into [`Self::Output`].
	fn build(&self, identity: Identity) -> IdentityFuture<'_, Self::Output, Self::Error>;
}

/// Builder that returns the normalized [`Identity`] unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicIdentityBuilder;
impl IdentityBuilder for BasicIdentityBuilder {
	type Error = AuthenticationError;
	type Output = Identity;

	fn build(&self, identity: Identity) -> IdentityFuture<'_, Self::Output, Self::Error> {
		Box::pin(async move { Ok(identity) })
	}
}
