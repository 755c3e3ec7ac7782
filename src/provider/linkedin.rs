//! LinkedIn profile resolver.
//!
//! [`LinkedInProvider::resolve`] signs one `GET` against the fixed v1 profile endpoint,
//! classifies the reply, and hands the normalized [`Identity`] to the configured
//! [`IdentityBuilder`]. Nothing is cached or retried; concurrent calls share no mutable state.

// crates.io
use oauth2::AsyncHttpClient;
// self
use crate::{
	_prelude::*,
	auth::{Credential, Identity, ProviderId},
	error::{ConfigError, ProfileFailure, TransportError},
	ext::{IdentityBuilder, RequestSigner, SignableRequest},
	http::{ProfileHttpClient, ResponseMetadataSlot},
	obs::{self, ProfileOutcome, ProfileSpan},
	provider::{ProfileFuture, ProfileProvider, ProfileResponse, ServiceInfo},
};
#[cfg(feature = "reqwest")]
use crate::{ext::BasicIdentityBuilder, http::ReqwestHttpClient, oauth1::HmacSha1Signer};

/// Identifier LinkedIn is registered under.
pub const PROVIDER_ID: &str = "linkedin";
/// Profile resource together with the fixed field selection.
pub const PROFILE_API: &str = "https://api.linkedin.com/v1/people/~:(id,first-name,last-name,formatted-name,picture-url,email-address)?format=json";

#[cfg(feature = "reqwest")]
/// LinkedIn provider specialized for the crate's default reqwest + `HMAC-SHA1` stack.
pub type ReqwestLinkedInProvider =
	LinkedInProvider<ReqwestHttpClient, HmacSha1Signer, BasicIdentityBuilder>;

/// Resolves LinkedIn OAuth1 credentials into identities.
///
/// The signer, transport, and identity builder are injected at construction time and
/// shared through `Arc`s, so a single provider can serve any number of concurrent calls.
#[derive(Clone)]
pub struct LinkedInProvider<C, S, B>
where
	C: ?Sized + ProfileHttpClient,
	S: ?Sized + RequestSigner,
	B: ?Sized + IdentityBuilder,
{
	/// HTTP client used for the profile request.
	pub http_client: Arc<C>,
	/// Signer producing the OAuth1 authorization.
	pub signer: Arc<S>,
	/// Post-processor applied to every resolved identity.
	pub identity_builder: Arc<B>,
	/// Consumer settings passed to the signer.
	pub service: ServiceInfo,
	id: ProviderId,
	profile_endpoint: Url,
}
impl<C, S, B> LinkedInProvider<C, S, B>
where
	C: ?Sized + ProfileHttpClient,
	S: ?Sized + RequestSigner,
	B: ?Sized + IdentityBuilder,
{
	/// Creates a provider from validated consumer settings and its three collaborators.
	pub fn new(
		service: ServiceInfo,
		http_client: impl Into<Arc<C>>,
		signer: impl Into<Arc<S>>,
		identity_builder: impl Into<Arc<B>>,
	) -> Result<Self, ConfigError> {
		service.validate()?;

		let id = ProviderId::new(PROVIDER_ID)?;
		let profile_endpoint = Url::parse(PROFILE_API)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "profile", source })?;

		Ok(Self {
			http_client: http_client.into(),
			signer: signer.into(),
			identity_builder: identity_builder.into(),
			service,
			id,
			profile_endpoint,
		})
	}

	/// Points the provider at a different profile endpoint (mock servers in tests).
	#[cfg(any(test, feature = "test"))]
	pub fn with_profile_endpoint(mut self, endpoint: Url) -> Self {
		self.profile_endpoint = endpoint;

		self
	}

	/// Identifier of this provider.
	pub fn id(&self) -> &ProviderId {
		&self.id
	}

	/// Endpoint the profile request is sent to.
	pub fn profile_endpoint(&self) -> &Url {
		&self.profile_endpoint
	}

	/// Fetches the profile owned by `credential` and passes it through the identity builder.
	///
	/// Exactly one request is sent per call. Provider-reported failures surface as
	/// [`AuthenticationError::SpecifiedProfile`]; transport, parse, and payload-shape
	/// failures as [`AuthenticationError::UnspecifiedProfile`]. Builder failures are returned
	/// untouched.
	pub async fn resolve(&self, credential: Credential) -> Result<B::Output, B::Error> {
		let span = ProfileSpan::new(&self.id, "resolve");

		obs::record_profile_outcome(&self.id, ProfileOutcome::Attempt);

		span.instrument(async move {
			let identity = match self.fetch_identity(credential).await {
				Ok(identity) => identity,
				Err(e) => {
					let outcome = ProfileOutcome::of_error(&e);

					obs::log_profile_failure(&self.id, outcome, &e);
					obs::record_profile_outcome(&self.id, outcome);

					return Err(e.into());
				},
			};
			let result = self.identity_builder.build(identity).await;

			match &result {
				Ok(_) => obs::record_profile_outcome(&self.id, ProfileOutcome::Success),
				Err(_) => {
					obs::log_profile_failure(
						&self.id,
						ProfileOutcome::BuildFailure,
						&"Identity builder rejected the resolved identity",
					);
					obs::record_profile_outcome(&self.id, ProfileOutcome::BuildFailure);
				},
			}

			result
		})
		.await
	}

	async fn fetch_identity(&self, credential: Credential) -> Result<Identity, AuthenticationError> {
		let request = SignableRequest::get(self.profile_endpoint.clone());
		let directive = self
			.signer
			.sign(&request, &self.service, &credential)
			.map_err(|e| AuthenticationError::unspecified(&self.id, e))?;
		let http_request =
			directive.authorize(&request).map_err(|e| AuthenticationError::unspecified(&self.id, e))?;
		let slot = ResponseMetadataSlot::default();
		let handle = self.http_client.with_metadata(slot.clone());
		let response = handle.call(http_request).await.map_err(|e| {
			AuthenticationError::unspecified(
				&self.id,
				ProfileFailure::Transport {
					source: TransportError::from(e),
					status: slot.take().and_then(|meta| meta.status),
				},
			)
		})?;
		let status = Some(response.status().as_u16());

		match ProfileResponse::classify(response.body(), status)
			.map_err(|e| AuthenticationError::unspecified(&self.id, e))?
		{
			ProfileResponse::Error(body) => Err(body.into_error(&self.id)),
			ProfileResponse::Success(payload) => payload
				.into_identity(self.id.clone(), credential)
				.map_err(|e| AuthenticationError::unspecified(&self.id, e)),
		}
	}
}
#[cfg(feature = "reqwest")]
impl LinkedInProvider<ReqwestHttpClient, HmacSha1Signer, BasicIdentityBuilder> {
	/// Creates a provider backed by a default reqwest client and `HMAC-SHA1`
	/// signing that returns raw [`Identity`] values.
	pub fn with_defaults(service: ServiceInfo) -> Result<Self, ConfigError> {
		Self::new(
			service,
			ReqwestHttpClient::default(),
			HmacSha1Signer,
			BasicIdentityBuilder,
		)
	}
}
impl<C, S, B> ProfileProvider for LinkedInProvider<C, S, B>
where
	C: ?Sized + ProfileHttpClient,
	S: ?Sized + RequestSigner,
	B: ?Sized + IdentityBuilder,
{
	type Error = B::Error;
	type Output = B::Output;

	fn id(&self) -> &ProviderId {
		&self.id
	}

	fn resolve(&self, credential: Credential) -> ProfileFuture<'_, Self::Output, Self::Error> {
		Box::pin(LinkedInProvider::resolve(self, credential))
	}
}
impl<C, S, B> Debug for LinkedInProvider<C, S, B>
where
	C: ?Sized + ProfileHttpClient,
	S: ?Sized + RequestSigner,
	B: ?Sized + IdentityBuilder,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedInProvider")
			.field("id", &self.id)
			.field("profile_endpoint", &self.profile_endpoint.as_str())
			.field("service", &self.service)
			.finish()
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use httpmock::prelude::*;
	// self
	use super::*;
	use crate::_preludet::*;

	fn credential() -> Credential {
		Credential::new("member-token", "member-secret")
	}

	#[test]
	fn provider_uses_fixed_identity_and_endpoint() {
		let service = ServiceInfo::builder()
			.consumer_key("key")
			.consumer_secret("shh-consumer-secret")
			.build()
			.expect("Service info fixture should be valid.");
		let provider = ReqwestLinkedInProvider::with_defaults(service)
			.expect("Default provider should build.");

		assert_eq!(provider.id().as_ref(), "linkedin");
		assert_eq!(provider.profile_endpoint().host_str(), Some("api.linkedin.com"));
		assert_eq!(provider.profile_endpoint().query(), Some("format=json"));
		assert!(
			provider
				.profile_endpoint()
				.path()
				.ends_with(":(id,first-name,last-name,formatted-name,picture-url,email-address)")
		);
		assert!(!format!("{provider:?}").contains("shh-consumer-secret"));
	}

	#[test]
	fn provider_rejects_invalid_service_info() {
		let service = ServiceInfo { consumer_key: String::new(), consumer_secret: "s".into() };

		assert!(matches!(
			ReqwestLinkedInProvider::with_defaults(service),
			Err(ConfigError::InvalidServiceInfo(_))
		));
	}

	#[tokio::test]
	async fn reqwest_transport_resolves_profile() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/v1/people/~")
					.query_param("format", "json")
					.header_exists("authorization");
				then.status(200).header("content-type", "application/json").body(
					r#"{"id":"42","firstName":"Ada","lastName":"Lovelace","emailAddress":"ada@example.com"}"#,
				);
			})
			.await;
		let endpoint = Url::parse(&server.url("/v1/people/~?format=json"))
			.expect("Mock profile endpoint should parse.");
		let provider = build_reqwest_test_provider(endpoint);
		let identity =
			provider.resolve(credential()).await.expect("Mock profile should resolve.");

		assert_eq!(identity.provider_user_id.as_ref(), "42");
		assert_eq!(identity.first_name, "Ada");
		assert_eq!(identity.last_name, "Lovelace");
		assert_eq!(identity.full_name, "");
		assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
		assert_eq!(identity.avatar_url, None);
		assert_eq!(identity.credential, credential());

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn reqwest_transport_surfaces_provider_errors_with_status() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/v1/people/~");
				then.status(401).header("content-type", "application/json").body(
					r#"{"errorCode":0,"message":"[unauthorized]. The token used in the OAuth request is not valid.","requestId":"R1","status":401,"timestamp":1700000000000}"#,
				);
			})
			.await;
		let endpoint = Url::parse(&server.url("/v1/people/~?format=json"))
			.expect("Mock profile endpoint should parse.");
		let err = build_reqwest_test_provider(endpoint)
			.resolve(credential())
			.await
			.expect_err("Provider error bodies must fail resolution.");

		match err {
			AuthenticationError::SpecifiedProfile { code, ref request_id, .. } => {
				assert_eq!(code, 0);
				assert_eq!(request_id.as_deref(), Some("R1"));
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		mock.assert_calls_async(1).await;
	}

	#[tokio::test]
	async fn reqwest_transport_reports_non_json_bodies_as_unspecified() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/v1/people/~");
				then.status(502).body("<html>Bad Gateway</html>");
			})
			.await;
		let endpoint = Url::parse(&server.url("/v1/people/~?format=json"))
			.expect("Mock profile endpoint should parse.");
		let err = build_reqwest_test_provider(endpoint)
			.resolve(credential())
			.await
			.expect_err("HTML bodies must fail resolution.");

		assert!(matches!(
			err,
			AuthenticationError::UnspecifiedProfile {
				source: ProfileFailure::Parse { status: Some(502), .. },
				..
			}
		));

		mock.assert_calls_async(1).await;
	}
}
