//! OAuth1 token credentials issued by the handshake that precedes profile resolution.

// self
use crate::{_prelude::*, auth::SharedSecret};

/// Token/secret pair proving delegated access to a user's account at the provider.
///
/// The resolver never inspects the shape of either half; a malformed credential simply
/// produces a request the provider rejects.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
	/// Public token value (`oauth_token`).
	pub token: String,
	/// Token secret used when signing; redacted in formatters.
	pub secret: SharedSecret,
}
impl Credential {
	/// Creates a credential from the raw token and secret strings.
	pub fn new(token: impl Into<String>, secret: impl Into<SharedSecret>) -> Self {
		Self { token: token.into(), secret: secret.into() }
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("token", &self.token)
			.field("secret", &self.secret)
			.finish()
	}
}
