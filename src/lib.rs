//! LinkedIn OAuth 1.0a profile resolver: sign a single profile request, tell provider-reported
//! failures apart from real payloads, and hand back a normalized, provider-agnostic identity.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod ext;
pub mod http;
pub mod oauth1;
pub mod obs;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test`
	//! crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		ext::BasicIdentityBuilder,
		http::ReqwestHttpClient,
		oauth1::HmacSha1Signer,
		provider::{LinkedInProvider, ServiceInfo},
	};

	/// Provider type alias used by reqwest-backed tests.
	pub type ReqwestTestProvider =
		LinkedInProvider<ReqwestHttpClient, HmacSha1Signer, BasicIdentityBuilder>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`LinkedInProvider`] that talks to `profile_endpoint` instead of the live
	/// LinkedIn API, signing with [`HmacSha1Signer`] and returning raw identities.
	pub fn build_reqwest_test_provider(profile_endpoint: Url) -> ReqwestTestProvider {
		let service = ServiceInfo::builder()
			.consumer_key("test-consumer-key")
			.consumer_secret("test-consumer-secret")
			.build()
			.expect("Test service info should be valid.");

		LinkedInProvider::new(
			service,
			test_reqwest_http_client(),
			HmacSha1Signer,
			BasicIdentityBuilder,
		)
		.expect("LinkedIn provider should build with the test service info.")
		.with_profile_endpoint(profile_endpoint)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::AuthenticationError;
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
