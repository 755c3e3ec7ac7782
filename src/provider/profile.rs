//! Profile endpoint wire shapes and their classification.
//!
//! The endpoint never tags its replies. A non-null `errorCode` marks a provider-reported
//! failure; anything else is treated as a profile. Bodies are parsed into a neutral JSON
//! object first and classified before any typed field is read.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	auth::{AuthMethod, Credential, Identity, ProviderId, ProviderUserId},
	error::ProfileFailure,
};

const ERROR_CODE_FIELD: &str = "errorCode";

/// Classified profile endpoint reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileResponse {
	/// Provider-reported failure.
	Error(ProviderErrorBody),
	/// Profile payload.
	Success(ProfilePayload),
}
impl ProfileResponse {
	/// Parses and classifies a raw response body.
	///
	/// `status` is only attached to failures for diagnostics; it does not influence
	/// classification because error bodies arrive with 4xx statuses.
	///
	/// Only `errorCode` and `id` are typed strictly. An `errorCode` that is not an integer is
	/// a [`ProfileFailure::Parse`] and therefore not a provider-reported error. Every other
	/// field of an unexpected JSON type is read as absent.
	pub fn classify(body: &[u8], status: Option<u16>) -> Result<Self, ProfileFailure> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);
		let value: Value = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| ProfileFailure::Parse { source, status })?;

		deserializer.end().map_err(|source| ProfileFailure::TrailingData { source, status })?;

		let map = match value {
			Value::Object(map) => map,
			other => return Err(ProfileFailure::NotAnObject { found: json_kind(&other), status }),
		};

		if map.get(ERROR_CODE_FIELD).is_some_and(|code| !code.is_null()) {
			ProviderErrorBody::from_map(map, status).map(Self::Error)
		} else {
			ProfilePayload::from_map(map, status).map(Self::Success)
		}
	}
}

/// Error variant of the profile reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderErrorBody {
	/// Provider error code.
	pub error_code: i64,
	/// Human-readable message.
	pub message: Option<String>,
	/// Request identifier for support tickets.
	pub request_id: Option<String>,
	/// Time of the failure; epoch millis are kept as their decimal rendering.
	pub timestamp: Option<String>,
}
impl ProviderErrorBody {
	fn from_map(map: Map<String, Value>, status: Option<u16>) -> Result<Self, ProfileFailure> {
		#[derive(Deserialize)]
		struct Code {
			#[serde(rename = "errorCode")]
			error_code: i64,
		}

		let Code { error_code } = typed(&map, status)?;

		Ok(Self {
			error_code,
			message: text(&map, "message"),
			request_id: text(&map, "requestId"),
			timestamp: text_or_number(&map, "timestamp"),
		})
	}

	/// Converts the body into [`AuthenticationError::SpecifiedProfile`].
	pub fn into_error(self, provider: &ProviderId) -> AuthenticationError {
		let ProviderErrorBody { error_code, message, request_id, timestamp } = self;

		AuthenticationError::SpecifiedProfile {
			provider: provider.clone(),
			code: error_code,
			message,
			request_id,
			timestamp,
		}
	}
}

/// Success variant of the profile reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfilePayload {
	/// Provider user id; required even though the wire shape cannot enforce it.
	pub id: Option<String>,
	/// Given name.
	pub first_name: Option<String>,
	/// Family name.
	pub last_name: Option<String>,
	/// Display name.
	pub formatted_name: Option<String>,
	/// Profile picture URL.
	pub picture_url: Option<String>,
	/// Primary email address.
	pub email_address: Option<String>,
}
impl ProfilePayload {
	fn from_map(map: Map<String, Value>, status: Option<u16>) -> Result<Self, ProfileFailure> {
		#[derive(Deserialize)]
		struct Id {
			id: Option<String>,
		}

		let Id { id } = typed(&map, status)?;

		Ok(Self {
			id,
			first_name: text(&map, "firstName"),
			last_name: text(&map, "lastName"),
			formatted_name: text(&map, "formattedName"),
			picture_url: text(&map, "pictureUrl"),
			email_address: text(&map, "emailAddress"),
		})
	}

	/// Normalizes the payload into an [`Identity`] owned by `credential`.
	///
	/// Missing names become `""`; missing picture and email stay `None`. A missing or empty
	/// `id` fails instead of producing an identity.
	pub fn into_identity(
		self,
		provider: ProviderId,
		credential: Credential,
	) -> Result<Identity, ProfileFailure> {
		let provider_user_id = self
			.id
			.and_then(|id| ProviderUserId::new(id).ok())
			.ok_or(ProfileFailure::MissingField { field: "id" })?;

		Ok(Identity {
			provider_user_id,
			provider_id: provider,
			first_name: self.first_name.unwrap_or_default(),
			last_name: self.last_name.unwrap_or_default(),
			full_name: self.formatted_name.unwrap_or_default(),
			avatar_url: self.picture_url,
			email: self.email_address,
			auth_method: AuthMethod::OAuth1,
			credential,
		})
	}
}

fn typed<T>(map: &Map<String, Value>, status: Option<u16>) -> Result<T, ProfileFailure>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(Value::Object(map.clone()))
		.map_err(|source| ProfileFailure::Parse { source, status })
}

fn text(map: &Map<String, Value>, field: &str) -> Option<String> {
	map.get(field).and_then(Value::as_str).map(ToOwned::to_owned)
}

fn text_or_number(map: &Map<String, Value>, field: &str) -> Option<String> {
	match map.get(field)? {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn classify(body: &str) -> Result<ProfileResponse, ProfileFailure> {
		ProfileResponse::classify(body.as_bytes(), Some(200))
	}

	fn provider() -> ProviderId {
		ProviderId::new("linkedin").expect("Provider fixture should be valid.")
	}

	#[test]
	fn error_code_selects_error_variant() {
		let response = classify(
			r#"{"errorCode":0,"message":"Unknown authentication scheme","requestId":"ABC","status":401,"timestamp":1700000000000}"#,
		)
		.expect("Error bodies should classify.");

		assert_eq!(
			response,
			ProfileResponse::Error(ProviderErrorBody {
				error_code: 0,
				message: Some("Unknown authentication scheme".into()),
				request_id: Some("ABC".into()),
				timestamp: Some("1700000000000".into()),
			})
		);
	}

	#[test]
	fn null_error_code_is_treated_as_absent() {
		let response =
			classify(r#"{"errorCode":null,"id":"42"}"#).expect("Profile bodies should classify.");

		assert!(matches!(response, ProfileResponse::Success(ProfilePayload { id: Some(ref id), .. }) if id == "42"));
	}

	#[test]
	fn empty_object_is_a_profile_without_id() {
		let ProfileResponse::Success(payload) =
			classify("{}").expect("An empty object should classify as a profile.")
		else {
			panic!("An empty object has no errorCode and must not classify as an error.");
		};
		let err = payload
			.into_identity(provider(), Credential::new("t", "s"))
			.expect_err("A profile without id must not produce an identity.");

		assert!(matches!(err, ProfileFailure::MissingField { field: "id" }));
	}

	#[test]
	fn empty_id_is_rejected() {
		let payload = ProfilePayload { id: Some(String::new()), ..Default::default() };

		assert!(matches!(
			payload.into_identity(provider(), Credential::new("t", "s")),
			Err(ProfileFailure::MissingField { field: "id" })
		));
	}

	#[test]
	fn normalization_defaults_names_but_not_contact_fields() {
		let ProfileResponse::Success(payload) =
			classify(r#"{"id":"42","firstName":"Ada","pictureUrl":""}"#)
				.expect("Profile bodies should classify.")
		else {
			panic!("Profile body classified as an error.");
		};
		let identity = payload
			.into_identity(provider(), Credential::new("t", "s"))
			.expect("Profile with id should normalize.");

		assert_eq!(identity.provider_user_id.as_ref(), "42");
		assert_eq!(identity.first_name, "Ada");
		assert_eq!(identity.last_name, "");
		assert_eq!(identity.full_name, "");
		assert_eq!(identity.avatar_url.as_deref(), Some(""));
		assert_eq!(identity.email, None);
		assert_eq!(identity.auth_method, AuthMethod::OAuth1);
	}

	#[test]
	fn malformed_bodies_report_parse_failures() {
		assert!(matches!(
			classify("<html>"),
			Err(ProfileFailure::Parse { status: Some(200), .. })
		));
		assert!(matches!(
			classify(r#"["id"]"#),
			Err(ProfileFailure::NotAnObject { found: "array", .. })
		));
		assert!(matches!(classify(r#"{"id":"1"} {}"#), Err(ProfileFailure::TrailingData { .. })));

		let Err(ProfileFailure::Parse { source, .. }) = classify(r#"{"id":7,"firstName":"Ada"}"#)
		else {
			panic!("A non-string id must fail to parse.");
		};

		assert_eq!(source.path().to_string(), "id");
	}

	#[test]
	fn mistyped_error_code_is_a_parse_failure() {
		let Err(ProfileFailure::Parse { source, .. }) = classify(r#"{"errorCode":"401"}"#) else {
			panic!("A string errorCode must not count as provider-reported.");
		};

		assert_eq!(source.path().to_string(), "errorCode");
	}

	#[test]
	fn mistyped_error_diagnostics_still_classify_as_errors() {
		for body in [
			r#"{"errorCode":401,"requestId":12345}"#,
			r#"{"errorCode":401,"message":{"text":"invalid token"}}"#,
			r#"{"errorCode":401,"timestamp":true}"#,
		] {
			let Ok(ProfileResponse::Error(error)) = classify(body) else {
				panic!("{body} carries an errorCode and must classify as an error.");
			};

			assert_eq!(error.error_code, 401);

			let rendered = error.into_error(&provider()).to_string();

			assert!(rendered.contains("Error code: 401"), "{rendered}");
			assert!(rendered.contains("unavailable"), "{rendered}");
		}

		let Ok(ProfileResponse::Error(error)) =
			classify(r#"{"errorCode":401,"message":"invalid token","requestId":["R"]}"#)
		else {
			panic!("Error bodies should classify.");
		};

		assert_eq!(error.message.as_deref(), Some("invalid token"));
		assert_eq!(error.request_id, None);
	}

	#[test]
	fn mistyped_optional_profile_fields_read_as_absent() {
		let ProfileResponse::Success(payload) = classify(
			r#"{"id":"42","firstName":7,"lastName":"Lovelace","pictureUrl":{"url":"x"},"emailAddress":false}"#,
		)
		.expect("Profiles with mistyped optional fields should classify.") else {
			panic!("Profile body classified as an error.");
		};
		let identity = payload
			.into_identity(provider(), Credential::new("t", "s"))
			.expect("Profile with id should normalize.");

		assert_eq!(identity.provider_user_id.as_ref(), "42");
		assert_eq!(identity.first_name, "");
		assert_eq!(identity.last_name, "Lovelace");
		assert_eq!(identity.avatar_url, None);
		assert_eq!(identity.email, None);
	}
}
