//! Identity providers (behavior) and their consumer settings (data).
//!
//! `service` holds the validated consumer key/secret shared with the provider, `profile`
//! classifies raw profile responses, and `linkedin` wires both into the LinkedIn resolver.
//! [`ProfileProvider`] lets hosts keep several providers behind one object-safe interface.

pub mod linkedin;
pub mod profile;
pub mod service;

pub use linkedin::*;
pub use profile::*;
pub use service::*;

// self
use crate::{
	_prelude::*,
	auth::{Credential, ProviderId},
};

/// Boxed future returned by [`ProfileProvider::resolve`].
pub type ProfileFuture<'a, Output, Error> =
	Pin<Box<dyn Future<Output = Result<Output, Error>> + 'a + Send>>;

/// Provider that turns OAuth1 credentials into caller-facing identities.
///
/// Each provider is its own implementation of this trait; nothing here is shared between
/// providers beyond the contract.
pub trait ProfileProvider
where
	Self: Send + Sync,
{
	/// Caller-facing identity value.
	type Output;
	/// Failure surfaced by resolution.
	type Error;

	/// Identifier of this provider; unique within a deployment.
	fn id(&self) -> &ProviderId;

	/// Fetches and normalizes the profile owned by `credential`.
	fn resolve(&self, credential: Credential) -> ProfileFuture<'_, Self::Output, Self::Error>;
}
