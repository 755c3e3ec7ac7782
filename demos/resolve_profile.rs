//! Resolves the LinkedIn member behind an OAuth1 token pair using the default reqwest transport
//! and `HMAC-SHA1` signing.
//!
//! Expects `LINKEDIN_CONSUMER_KEY`, `LINKEDIN_CONSUMER_SECRET`, `LINKEDIN_TOKEN`, and
//! `LINKEDIN_TOKEN_SECRET` in the environment.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use oauth1_identity::{
	auth::Credential,
	error::AuthenticationError,
	provider::{ReqwestLinkedInProvider, ServiceInfo},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let service = ServiceInfo::builder()
		.consumer_key(var("LINKEDIN_CONSUMER_KEY")?)
		.consumer_secret(var("LINKEDIN_CONSUMER_SECRET")?)
		.build()?;
	let provider = ReqwestLinkedInProvider::with_defaults(service)?;
	let credential = Credential::new(var("LINKEDIN_TOKEN")?, var("LINKEDIN_TOKEN_SECRET")?);

	match provider.resolve(credential).await {
		Ok(identity) => {
			println!(
				"Resolved {} ({}) as {}:{}.",
				identity.full_name,
				identity.email.as_deref().unwrap_or("no email shared"),
				identity.provider_id,
				identity.provider_user_id,
			);
		},
		Err(e @ AuthenticationError::SpecifiedProfile { .. }) =>
			println!("LinkedIn rejected the request: {e}"),
		Err(e) => return Err(e).wrap_err("Profile resolution failed."),
	}

	Ok(())
}

fn var(name: &str) -> Result<String> {
	env::var(name).wrap_err_with(|| format!("Environment variable {name} is not set."))
}
