//! Consumer settings shared between this application and a provider.

// self
use crate::{_prelude::*, auth::SharedSecret};

/// Errors raised while constructing or validating [`ServiceInfo`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ServiceInfoError {
	/// Consumer key is required for every signed request.
	#[error("Missing consumer key.")]
	MissingConsumerKey,
	/// Consumer secret is required for every signed request.
	#[error("Missing consumer secret.")]
	MissingConsumerSecret,
	/// Consumer keys are opaque tokens and never contain whitespace.
	#[error("Consumer key contains whitespace.")]
	ConsumerKeyContainsWhitespace,
}

/// Consumer key and secret issued by the provider when the application was registered.
///
/// Values usually arrive from the host's own configuration layer (hence `Deserialize`);
/// [`ServiceInfo::validate`] runs again when a provider is built from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
	/// Public consumer key (`oauth_consumer_key`).
	pub consumer_key: String,
	/// Consumer secret; redacted in formatters.
	pub consumer_secret: SharedSecret,
}
impl ServiceInfo {
	/// Creates a new builder.
	pub fn builder() -> ServiceInfoBuilder {
		ServiceInfoBuilder::default()
	}

	/// Validates invariants for the consumer settings.
	pub fn validate(&self) -> Result<(), ServiceInfoError> {
		if self.consumer_key.is_empty() {
			return Err(ServiceInfoError::MissingConsumerKey);
		}
		if self.consumer_key.chars().any(char::is_whitespace) {
			return Err(ServiceInfoError::ConsumerKeyContainsWhitespace);
		}
		if self.consumer_secret.is_empty() {
			return Err(ServiceInfoError::MissingConsumerSecret);
		}

		Ok(())
	}
}

/// Builder for [`ServiceInfo`] values.
#[derive(Debug, Default)]
pub struct ServiceInfoBuilder {
	/// Consumer key being configured.
	pub consumer_key: Option<String>,
	/// Consumer secret being configured.
	pub consumer_secret: Option<SharedSecret>,
}
impl ServiceInfoBuilder {
	/// Sets the consumer key.
	pub fn consumer_key(mut self, key: impl Into<String>) -> Self {
		self.consumer_key = Some(key.into());

		self
	}

	/// Sets the consumer secret.
	pub fn consumer_secret(mut self, secret: impl Into<SharedSecret>) -> Self {
		self.consumer_secret = Some(secret.into());

		self
	}

	/// Consumes the builder and validates the resulting settings.
	pub fn build(self) -> Result<ServiceInfo, ServiceInfoError> {
		let consumer_key = self.consumer_key.ok_or(ServiceInfoError::MissingConsumerKey)?;
		let consumer_secret =
			self.consumer_secret.ok_or(ServiceInfoError::MissingConsumerSecret)?;
		let service = ServiceInfo { consumer_key, consumer_secret };

		service.validate()?;

		Ok(service)
	}
}
