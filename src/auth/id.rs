//! Strongly typed identifiers for providers and the users they vouch for.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $validate:ident) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (provider, provider user).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (provider, provider user).
		kind: &'static str,
	},
	/// The identifier contains uppercase characters.
	#[error("{kind} identifier must be lowercase.")]
	NotLowercase {
		/// Kind of identifier (provider, provider user).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (provider, provider user).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	ProviderId,
	"Lowercase identifier naming an identity provider; unique within a deployment.",
	"Provider",
	validate_provider
}
def_id! {
	ProviderUserId,
	"Identifier a provider assigns to one of its users. Always non-empty.",
	"ProviderUser",
	validate_provider_user
}

fn validate_provider(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	validate_provider_user(kind, view)?;

	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.chars().any(char::is_uppercase) {
		return Err(IdentifierError::NotLowercase { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

// Provider-assigned ids are opaque; only emptiness is rejected.
fn validate_provider_user(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn provider_ids_must_be_lowercase_tokens() {
		let provider =
			ProviderId::new("linkedin").expect("Provider fixture should be considered valid.");

		assert_eq!(provider.as_ref(), "linkedin");
		assert!(matches!(ProviderId::new(""), Err(IdentifierError::Empty { .. })));
		assert!(matches!(
			ProviderId::new("linked in"),
			Err(IdentifierError::ContainsWhitespace { .. })
		));
		assert!(matches!(ProviderId::new("LinkedIn"), Err(IdentifierError::NotLowercase { .. })));
		assert!(matches!(
			ProviderId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { .. })
		));
	}

	#[test]
	fn provider_user_ids_only_reject_empty_values() {
		assert!(ProviderUserId::new("").is_err());

		let id = ProviderUserId::new("Ab Cd-42").expect("Opaque user ids should be accepted.");

		assert_eq!(&*id, "Ab Cd-42");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: ProviderUserId =
			serde_json::from_str("\"42\"").expect("User id should deserialize successfully.");

		assert_eq!(id.as_ref(), "42");
		assert!(serde_json::from_str::<ProviderUserId>("\"\"").is_err());
		assert!(serde_json::from_str::<ProviderId>("\"Twitter\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: std::collections::HashMap<ProviderId, u8> = std::collections::HashMap::from_iter([(
			ProviderId::new("linkedin").expect("Provider used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("linkedin"), Some(&7));
	}
}
