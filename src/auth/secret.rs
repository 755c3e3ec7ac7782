//! Shared-secret wrapper that keeps OAuth1 signing material out of logs.

// self
use crate::_prelude::*;

/// OAuth1 shared secret (token secret or consumer secret) that redacts itself when formatted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedSecret(String);
impl SharedSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Only signers should need this; never log it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no secret material is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for SharedSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for SharedSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for SharedSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SharedSecret").field(&"<redacted>").finish()
	}
}
impl Display for SharedSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
