//! Error types shared across the resolver, transports, signers, and configuration.

// crates.io
use oauth2::HttpClientError;
// self
use crate::{
	_prelude::*,
	auth::{IdentifierError, ProviderId},
	ext::SigningError,
	provider::ServiceInfoError,
};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

const UNAVAILABLE: &str = "unavailable";

/// Terminal failures raised while resolving a profile into an identity.
///
/// Both variants end the call; the split only preserves whether the provider itself reported
/// the problem.
#[derive(Debug, ThisError)]
pub enum AuthenticationError {
	/// The provider answered at the transport level but reported an application-level error.
	#[error(
		"Error retrieving profile information from {provider}. Error code: {code}, request id: {}, message: {}, timestamp: {}.",
		.request_id.as_deref().unwrap_or(UNAVAILABLE),
		.message.as_deref().unwrap_or(UNAVAILABLE),
		.timestamp.as_deref().unwrap_or(UNAVAILABLE)
	)]
	SpecifiedProfile {
		/// Provider that reported the error.
		provider: ProviderId,
		/// Numeric error code from the `errorCode` field.
		code: i64,
		/// Provider-supplied message, if any.
		message: Option<String>,
		/// Provider-supplied request identifier, if any.
		request_id: Option<String>,
		/// Provider-supplied timestamp, if any.
		timestamp: Option<String>,
	},
	/// Anything else that prevented producing a valid identity.
	#[error("Error retrieving profile information from {provider}.")]
	UnspecifiedProfile {
		/// Provider the request was addressed to.
		provider: ProviderId,
		/// Underlying cause.
		#[source]
		source: ProfileFailure,
	},
}
impl AuthenticationError {
	/// Wraps `source` in [`AuthenticationError::UnspecifiedProfile`] for `provider`.
	pub fn unspecified(provider: &ProviderId, source: impl Into<ProfileFailure>) -> Self {
		Self::UnspecifiedProfile { provider: provider.clone(), source: source.into() }
	}

	/// Provider the failure belongs to.
	pub fn provider(&self) -> &ProviderId {
		match self {
			Self::SpecifiedProfile { provider, .. } | Self::UnspecifiedProfile { provider, .. } =>
				provider,
		}
	}

	/// Returns `true` when the provider itself reported the failure.
	pub fn is_specified(&self) -> bool {
		matches!(self, Self::SpecifiedProfile { .. })
	}
}

/// Causes carried by [`AuthenticationError::UnspecifiedProfile`].
#[derive(Debug, ThisError)]
pub enum ProfileFailure {
	/// The signer refused to produce a signing directive.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// The outbound request could not be assembled.
	#[error("Profile request could not be constructed.")]
	Request(#[from] oauth2::http::Error),
	/// The transport failed before a response body was available.
	#[error("Profile request failed in transit.")]
	Transport {
		/// Transport failure.
		#[source]
		source: TransportError,
		/// HTTP status code, when the failure happened after headers arrived.
		status: Option<u16>,
	},
	/// The response body is not valid JSON or does not match the expected field types.
	#[error("Profile endpoint returned malformed JSON.")]
	Parse {
		/// Structured parsing failure including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: Option<u16>,
	},
	/// A JSON document was followed by further data.
	#[error("Profile endpoint returned trailing data after the JSON document.")]
	TrailingData {
		/// Parser failure raised at the trailing data.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: Option<u16>,
	},
	/// The response body is valid JSON but not an object.
	#[error("Profile endpoint returned a JSON {found} instead of an object.")]
	NotAnObject {
		/// JSON type that was found.
		found: &'static str,
		/// HTTP status code of the response.
		status: Option<u16>,
	},
	/// A success-shaped payload omitted a required field.
	#[error("Profile payload is missing the required `{field}` field.")]
	MissingField {
		/// Wire name of the missing field.
		field: &'static str,
	},
}

/// Configuration and validation failures raised while assembling a provider.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A built-in endpoint constant failed to parse.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Consumer settings are invalid.
	#[error(transparent)]
	InvalidServiceInfo(#[from] ServiceInfoError),
	/// Provider identifier is invalid.
	#[error(transparent)]
	InvalidProviderId(#[from] IdentifierError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the profile endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// HTTP request or response could not be converted.
	#[error("HTTP error occurred while calling the profile endpoint.")]
	Http(#[from] oauth2::http::Error),
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the profile endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured error.
	#[error("Transport failed while calling the profile endpoint: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl<E> From<HttpClientError<E>> for TransportError
where
	E: 'static + Send + Sync + StdError,
{
	fn from(e: HttpClientError<E>) -> Self {
		match e {
			HttpClientError::Reqwest(inner) => Self::Network { source: inner },
			HttpClientError::Http(inner) => Self::Http(inner),
			HttpClientError::Io(inner) => Self::Io(inner),
			HttpClientError::Other(message) => Self::Other { message },
			other => Self::Other { message: format!("{other:?}") },
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn provider() -> ProviderId {
		ProviderId::new("linkedin").expect("Provider fixture should be valid.")
	}

	#[test]
	fn specified_profile_renders_every_diagnostic() {
		let err = AuthenticationError::SpecifiedProfile {
			provider: provider(),
			code: 401,
			message: Some("invalid token".into()),
			request_id: Some("REQ-1".into()),
			timestamp: Some("1700000000000".into()),
		};
		let rendered = err.to_string();

		assert!(rendered.contains("linkedin"));
		assert!(rendered.contains("401"));
		assert!(rendered.contains("invalid token"));
		assert!(rendered.contains("REQ-1"));
		assert!(rendered.contains("1700000000000"));
		assert!(err.is_specified());
	}

	#[test]
	fn specified_profile_marks_missing_diagnostics_unavailable() {
		let err = AuthenticationError::SpecifiedProfile {
			provider: provider(),
			code: 500,
			message: None,
			request_id: None,
			timestamp: None,
		};

		assert_eq!(
			err.to_string(),
			"Error retrieving profile information from linkedin. Error code: 500, request id: unavailable, message: unavailable, timestamp: unavailable."
		);
	}

	#[test]
	fn unspecified_profile_keeps_cause_as_source() {
		let err = AuthenticationError::unspecified(
			&provider(),
			ProfileFailure::MissingField { field: "id" },
		);

		assert!(!err.is_specified());
		assert_eq!(err.provider().as_ref(), "linkedin");

		let source = err.source().expect("Unspecified errors must expose their cause.");

		assert!(source.to_string().contains("`id`"));
	}

	#[test]
	fn http_client_errors_map_onto_transport_variants() {
		let err: TransportError =
			HttpClientError::<std::io::Error>::Other("connection reset".into()).into();

		assert!(matches!(err, TransportError::Other { ref message } if message == "connection reset"));

		let err: TransportError = HttpClientError::<std::io::Error>::Reqwest(Box::new(
			std::io::Error::other("timed out"),
		))
		.into();

		assert!(matches!(err, TransportError::Network { .. }));
	}
}
