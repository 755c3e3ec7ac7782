//! Provider-agnostic identity records produced by successful profile resolution.

// self
use crate::{
	_prelude::*,
	auth::{Credential, ProviderId, ProviderUserId},
};

/// Authentication mechanism that produced an [`Identity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
	/// OAuth 1.0a token credentials.
	OAuth1,
	/// OAuth 2.0 bearer tokens.
	OAuth2,
	/// OpenID assertions.
	OpenId,
	/// Local username + password.
	UserPassword,
}
impl AuthMethod {
	/// Returns a stable label suitable for logs and storage keys.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthMethod::OAuth1 => "oauth1",
			AuthMethod::OAuth2 => "oauth2",
			AuthMethod::OpenId => "openid",
			AuthMethod::UserPassword => "user_password",
		}
	}
}
impl Display for AuthMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Normalized user profile returned by a provider.
///
/// Name fields are always present (empty when the provider omitted them) while
/// `avatar_url` and `email` stay `None` unless the provider actually sent a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Identifier assigned by the provider.
	pub provider_user_id: ProviderUserId,
	/// Provider that vouched for this identity.
	pub provider_id: ProviderId,
	/// Given name, or `""`.
	pub first_name: String,
	/// Family name, or `""`.
	pub last_name: String,
	/// Display name, or `""`.
	pub full_name: String,
	/// Profile picture URL, if the provider sent one.
	pub avatar_url: Option<String>,
	/// Email address, if the provider sent one.
	pub email: Option<String>,
	/// Mechanism used to authenticate.
	pub auth_method: AuthMethod,
	/// Credential the profile was fetched with.
	pub credential: Credential,
}
