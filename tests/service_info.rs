// self
use oauth1_identity::{
	auth::SharedSecret,
	provider::{ServiceInfo, ServiceInfoError},
};

#[test]
fn builder_requires_both_halves() {
	let err = ServiceInfo::builder()
		.consumer_secret("secret")
		.build()
		.expect_err("Consumer key should be required.");

	assert_eq!(err, ServiceInfoError::MissingConsumerKey);

	let err = ServiceInfo::builder()
		.consumer_key("key")
		.build()
		.expect_err("Consumer secret should be required.");

	assert_eq!(err, ServiceInfoError::MissingConsumerSecret);

	let err = ServiceInfo::builder()
		.consumer_key("key")
		.consumer_secret("")
		.build()
		.expect_err("Empty consumer secrets should be rejected.");

	assert_eq!(err, ServiceInfoError::MissingConsumerSecret);
}

#[test]
fn consumer_key_must_be_a_single_token() {
	let err = ServiceInfo::builder()
		.consumer_key("my key")
		.consumer_secret("secret")
		.build()
		.expect_err("Whitespace in consumer keys should be rejected.");

	assert_eq!(err, ServiceInfoError::ConsumerKeyContainsWhitespace);
}

#[test]
fn deserialized_settings_validate_and_redact() {
	let service: ServiceInfo =
		serde_json::from_str(r#"{"consumer_key":"77abc","consumer_secret":"top-secret"}"#)
			.expect("Service info should deserialize from host configuration.");

	service.validate().expect("Deserialized settings should be valid.");

	assert_eq!(service.consumer_key, "77abc");
	assert_eq!(service.consumer_secret, SharedSecret::new("top-secret"));
	assert!(!format!("{service:?}").contains("top-secret"));

	let invalid: ServiceInfo =
		serde_json::from_str(r#"{"consumer_key":"","consumer_secret":"top-secret"}"#)
			.expect("Empty keys still deserialize.");

	assert_eq!(invalid.validate(), Err(ServiceInfoError::MissingConsumerKey));
}
