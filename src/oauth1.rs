//! OAuth 1.0a request signers.
//!
//! [`HmacSha1Signer`] is the signer LinkedIn expects and the one the default provider uses.
//! [`PlaintextSigner`] (RFC 5849 §3.4.4) is opt-in for endpoints that accept `PLAINTEXT`; it
//! relies on TLS for confidentiality.

// crates.io
use oauth1_request::{Credentials, HMAC_SHA1, Token, request::ParameterList};
use oauth2::http::Method;
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	auth::Credential,
	ext::{RequestSigner, SignableRequest, SigningDirective, SigningError},
	provider::ServiceInfo,
};

/// Protocol version advertised in `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Where a signer places the OAuth protocol parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignaturePlacement {
	/// `Authorization: OAuth ...` header (RFC 5849 §3.5.1).
	#[default]
	Header,
	/// URI query parameters (RFC 5849 §3.5.3).
	Query,
}

/// Signer implementing the `HMAC-SHA1` signature method (RFC 5849 §3.4.2).
///
/// Protocol parameters travel in the `Authorization` header. Query parameters already on the
/// request URL are part of the signature base string.
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1Signer;
impl HmacSha1Signer {
	/// Value of `oauth_signature_method`.
	pub const METHOD: &str = "HMAC-SHA1";
}
impl RequestSigner for HmacSha1Signer {
	fn sign(
		&self,
		request: &SignableRequest,
		service: &ServiceInfo,
		credential: &Credential,
	) -> Result<SigningDirective, SigningError> {
		if request.method != Method::GET {
			return Err(SigningError::new(format!(
				"{} requests are not supported by the HMAC-SHA1 signer",
				request.method
			)));
		}

		let mut base = request.url.clone();

		base.set_query(None);
		base.set_fragment(None);

		let mut query = request
			.url
			.query_pairs()
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect::<Vec<_>>();

		query.sort();

		let token = Token::new(
			Credentials::new(service.consumer_key.as_str(), service.consumer_secret.expose()),
			Credentials::new(credential.token.as_str(), credential.secret.expose()),
		);
		let header =
			oauth1_request::get(base.as_str(), &ParameterList::new(query), &token, HMAC_SHA1);

		Ok(SigningDirective::Header(header))
	}
}

/// Signer implementing the `PLAINTEXT` signature method.
///
/// Not used by default; pass it to [`LinkedInProvider::new`](crate::provider::LinkedInProvider::new)
/// explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaintextSigner {
	/// Where the protocol parameters are emitted.
	pub placement: SignaturePlacement,
}
impl PlaintextSigner {
	/// Value of `oauth_signature_method`.
	pub const METHOD: &str = "PLAINTEXT";

	/// Signer that emits an `Authorization` header.
	pub fn header() -> Self {
		Self { placement: SignaturePlacement::Header }
	}

	/// Signer that emits query parameters.
	pub fn query() -> Self {
		Self { placement: SignaturePlacement::Query }
	}

	fn sign_with(
		&self,
		service: &ServiceInfo,
		credential: &Credential,
		nonce: String,
		timestamp: i64,
	) -> SigningDirective {
		let signature = format!(
			"{}&{}",
			percent_encode(service.consumer_secret.expose()),
			percent_encode(credential.secret.expose())
		);
		let params = vec![
			("oauth_consumer_key".to_owned(), service.consumer_key.clone()),
			("oauth_nonce".to_owned(), nonce),
			("oauth_signature".to_owned(), signature),
			("oauth_signature_method".to_owned(), Self::METHOD.to_owned()),
			("oauth_timestamp".to_owned(), timestamp.to_string()),
			("oauth_token".to_owned(), credential.token.clone()),
			("oauth_version".to_owned(), OAUTH_VERSION.to_owned()),
		];

		match self.placement {
			SignaturePlacement::Header => SigningDirective::Header(authorization_header(&params)),
			SignaturePlacement::Query => SigningDirective::Query(params),
		}
	}
}
impl RequestSigner for PlaintextSigner {
	fn sign(
		&self,
		_request: &SignableRequest,
		service: &ServiceInfo,
		credential: &Credential,
	) -> Result<SigningDirective, SigningError> {
		Ok(self.sign_with(
			service,
			credential,
			nonce(),
			OffsetDateTime::now_utc().unix_timestamp(),
		))
	}
}

/// Percent-encodes `value` with the RFC 3986 unreserved set required by RFC 5849 §3.6.
pub fn percent_encode(value: &str) -> String {
	urlencoding::encode(value).into_owned()
}

/// Renders protocol parameters as an `Authorization` header value.
pub fn authorization_header(params: &[(String, String)]) -> String {
	let rendered = params
		.iter()
		.map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
		.collect::<Vec<_>>()
		.join(", ");

	format!("OAuth {rendered}")
}

fn nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
