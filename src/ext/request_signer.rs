//! Request signing contracts that let callers plug any OAuth1 signature method into the
//! resolver.

// crates.io
use oauth2::{
	HttpRequest,
	http::{
		self, Method,
		header::{ACCEPT, AUTHORIZATION},
	},
};
// self
use crate::{_prelude::*, auth::Credential, error::BoxError, provider::ServiceInfo};

/// Produces the proof-of-possession attached to an outbound provider request.
///
/// The resolver treats the returned [`SigningDirective`] as opaque; implementations decide
/// the signature method and whether the parameters travel in a header or the query string.
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Signs `request` on behalf of `credential` using the consumer settings in `service`.
	fn sign(
		&self,
		request: &SignableRequest,
		service: &ServiceInfo,
		credential: &Credential,
	) -> Result<SigningDirective, SigningError>;
}

/// Method + URL pair a signer covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignableRequest {
	/// HTTP method of the request.
	pub method: Method,
	/// Absolute request URL, including any fixed query parameters.
	pub url: Url,
}
impl SignableRequest {
	/// Describes a `GET` request for `url`.
	pub fn get(url: Url) -> Self {
		Self { method: Method::GET, url }
	}
}

/// Signed authorization material ready to be attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub enum SigningDirective {
	/// Full value of the `Authorization` header.
	Header(String),
	/// Parameters appended to the query string.
	Query(Vec<(String, String)>),
}
impl SigningDirective {
	/// Builds a body-less JSON request for `request` carrying this directive.
	pub fn authorize(&self, request: &SignableRequest) -> Result<HttpRequest, http::Error> {
		let mut url = request.url.clone();
		let mut builder = http::Request::builder()
			.method(request.method.clone())
			.header(ACCEPT, "application/json");

		match self {
			Self::Header(value) => builder = builder.header(AUTHORIZATION, value.as_str()),
			Self::Query(params) => {
				url.query_pairs_mut().extend_pairs(params.iter());
			},
		}

		builder.uri(url.as_str()).body(Vec::new())
	}
}
impl Debug for SigningDirective {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Header(_) => f.write_str("SigningDirective::Header(<redacted>)"),
			Self::Query(params) => f
				.debug_tuple("SigningDirective::Query")
				.field(&params.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>())
				.finish(),
		}
	}
}

/// Failure reported by a [`RequestSigner`].
#[derive(Debug, ThisError)]
#[error("Request signing failed: {reason}.")]
pub struct SigningError {
	/// Human-readable reason.
	pub reason: String,
	/// Underlying failure, when one exists.
	#[source]
	pub source: Option<BoxError>,
}
impl SigningError {
	/// Creates a signing error without an underlying cause.
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into(), source: None }
	}

	/// Creates a signing error wrapping `source`.
	pub fn with_source(
		reason: impl Into<String>,
		source: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self { reason: reason.into(), source: Some(Box::new(source)) }
	}
}
