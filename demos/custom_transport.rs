//! Demonstrates plugging a non-reqwest transport and an application-specific identity builder
//! into the LinkedIn resolver.
//!
//! 1. Implement [`ProfileHttpClient`] so the transport records [`ResponseMetadata`] via the
//!    provided [`ResponseMetadataSlot`].
//! 2. Implement [`IdentityBuilder`] to turn the normalized identity into an application user.
//! 3. Pass both to [`LinkedInProvider::new`] together with a signer.
//! 4. Inspect how transport, provider, and builder failures reach the caller.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
	sync::Arc,
};
// crates.io
use color_eyre::Result;
// self
use oauth1_identity::{
	auth::{Credential, Identity},
	error::AuthenticationError,
	ext::{IdentityBuilder, IdentityFuture},
	http::{
		ProfileHttpClient, ResponseMetadata, ResponseMetadataSlot,
		oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse},
	},
	oauth1::HmacSha1Signer,
	provider::{LinkedInProvider, ServiceInfo},
};

type DemoProvider = LinkedInProvider<MockHttpClient, HmacSha1Signer, AccountBuilder>;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let service =
		ServiceInfo::builder().consumer_key("demo-consumer").consumer_secret("demo-secret").build()?;
	let credential = Credential::new("demo-token", "demo-token-secret");
	let signer = Arc::new(HmacSha1Signer);
	let builder = Arc::new(AccountBuilder { tenant: "acme" });
	let provider: DemoProvider = LinkedInProvider::new(
		service.clone(),
		Arc::new(MockHttpClient::profile()),
		Arc::clone(&signer),
		Arc::clone(&builder),
	)?;
	let account = provider.resolve(credential.clone()).await?;

	println!(
		"Linked {} ({}) to tenant {} through the mock transport.",
		account.display_name, account.external_id, account.tenant
	);

	let rejecting: DemoProvider = LinkedInProvider::new(
		service.clone(),
		Arc::new(MockHttpClient::provider_error()),
		Arc::clone(&signer),
		Arc::clone(&builder),
	)?;

	match rejecting.resolve(credential.clone()).await {
		Ok(_) => println!("Mock provider unexpectedly accepted the token."),
		Err(AccountError::Profile(e)) => println!("Provider-reported failure: {e}"),
		Err(e) => println!("Unexpected failure: {e}."),
	}

	let failing: DemoProvider = LinkedInProvider::new(
		service,
		Arc::new(MockHttpClient::transport_error(MockTransportError::DnsFailure {
			host: "api.linkedin.com",
		})),
		signer,
		builder,
	)?;

	match failing.resolve(credential).await {
		Ok(_) => println!("Mock transport unexpectedly succeeded."),
		Err(e) => println!("Transport failure surfaced by the resolver: {e}."),
	}

	Ok(())
}

#[derive(Debug)]
struct Account {
	tenant: &'static str,
	external_id: String,
	display_name: String,
}

#[derive(Debug)]
enum AccountError {
	Profile(AuthenticationError),
	MissingEmail,
}
impl Display for AccountError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Profile(e) => write!(f, "{e}"),
			Self::MissingEmail => write!(f, "LinkedIn did not share an email address"),
		}
	}
}
impl From<AuthenticationError> for AccountError {
	fn from(e: AuthenticationError) -> Self {
		Self::Profile(e)
	}
}
impl StdError for AccountError {}

struct AccountBuilder {
	tenant: &'static str,
}
impl IdentityBuilder for AccountBuilder {
	type Error = AccountError;
	type Output = Account;

	fn build(&self, identity: Identity) -> IdentityFuture<'_, Self::Output, Self::Error> {
		Box::pin(async move {
			if identity.email.is_none() {
				return Err(AccountError::MissingEmail);
			}

			Ok(Account {
				tenant: self.tenant,
				external_id: format!("{}:{}", identity.provider_id, identity.provider_user_id),
				display_name: identity.full_name,
			})
		})
	}
}

#[derive(Clone, Debug)]
enum MockTransportError {
	DnsFailure { host: &'static str },
}
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::DnsFailure { host } => write!(f, "DNS lookup failed for {host}"),
		}
	}
}
impl StdError for MockTransportError {}

#[derive(Clone)]
enum MockBehavior {
	Respond { status: u16, body: &'static str },
	TransportError(MockTransportError),
}

#[derive(Clone)]
struct MockHttpClient {
	behavior: MockBehavior,
}
impl MockHttpClient {
	fn profile() -> Self {
		Self {
			behavior: MockBehavior::Respond {
				status: 200,
				body: r#"{"id":"mock-42","firstName":"Grace","lastName":"Hopper","formattedName":"Grace Hopper","emailAddress":"grace@example.com"}"#,
			},
		}
	}

	fn provider_error() -> Self {
		Self {
			behavior: MockBehavior::Respond {
				status: 401,
				body: r#"{"errorCode":0,"message":"Invalid access token.","requestId":"MOCK-1","status":401,"timestamp":1700000000000}"#,
			},
		}
	}

	fn transport_error(error: MockTransportError) -> Self {
		Self { behavior: MockBehavior::TransportError(error) }
	}
}
impl ProfileHttpClient for MockHttpClient {
	type Handle = MockHttpHandle;
	type TransportError = MockTransportError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		MockHttpHandle { slot, behavior: self.behavior.clone() }
	}
}

struct MockHttpHandle {
	slot: ResponseMetadataSlot,
	behavior: MockBehavior,
}
impl<'a> AsyncHttpClient<'a> for MockHttpHandle {
	type Error = HttpClientError<MockTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send>>;

	fn call(&'a self, _request: HttpRequest) -> Self::Future {
		let slot = self.slot.clone();
		let behavior = self.behavior.clone();

		Box::pin(async move {
			slot.take();

			match behavior {
				MockBehavior::Respond { status, body } => {
					slot.store(ResponseMetadata { status: Some(status) });

					let mut response = HttpResponse::new(body.as_bytes().to_vec());

					*response.status_mut() = status
						.try_into()
						.map_err(|_| HttpClientError::Other(format!("invalid status {status}")))?;

					Ok(response)
				},
				// The oauth2 crate keeps the `Reqwest` variant name even though the boxed payload
				// can be any transport error.
				MockBehavior::TransportError(error) => Err(HttpClientError::Reqwest(Box::new(error))),
			}
		})
	}
}
