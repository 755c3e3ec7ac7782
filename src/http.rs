//! Transport seam for the profile request.
//!
//! Any HTTP library can back the resolver by implementing [`ProfileHttpClient`]. The status
//! a transport records in its [`ResponseMetadataSlot`] is attached to transport and parse
//! failures, so a dropped connection after a `502` still reports the `502`.

pub use oauth2;

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, time::Duration as StdDuration};
// crates.io
use oauth2::{AsyncHttpClient, HttpClientError};
#[cfg(feature = "reqwest")] use oauth2::{HttpRequest, HttpResponse};
#[cfg(feature = "reqwest")] use reqwest::redirect::Policy;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// HTTP stack the resolver sends its single profile request through.
///
/// Implementations are shared behind `Arc<T>`. For every resolution the resolver asks for a
/// fresh [`AsyncHttpClient`] handle bound to a new [`ResponseMetadataSlot`], so handles must
/// own the state their request needs and their futures must be `Send`.
pub trait ProfileHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Failure type of the underlying HTTP library.
	type TransportError: 'static + Send + Sync + StdError;

	/// Per-request handle that reports into a [`ResponseMetadataSlot`].
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Returns a handle whose request outcome lands in `slot`.
	///
	/// # Slot Usage
	///
	/// - Clear the slot with [`ResponseMetadataSlot::take`] before sending.
	/// - Record the status with [`ResponseMetadataSlot::store`] as soon as headers arrive, even
	///   if reading the body fails afterwards.
	/// - Drop the slot together with the handle.
	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle;
}

/// Facts about the profile response that outlive a transport failure.
///
/// Construct it with named fields; more fields may follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// Status line code, once headers were received.
	pub status: Option<u16>,
}

/// Shared cell the transport writes [`ResponseMetadata`] into and the resolver reads from.
#[derive(Clone, Debug, Default)]
pub struct ResponseMetadataSlot(Arc<Mutex<Option<ResponseMetadata>>>);
impl ResponseMetadataSlot {
	/// Replaces whatever the slot held.
	pub fn store(&self, meta: ResponseMetadata) {
		*self.0.lock() = Some(meta);
	}

	/// Empties the slot and returns its previous content.
	pub fn take(&self) -> Option<ResponseMetadata> {
		self.0.lock().take()
	}
}

/// Default transport built on [`ReqwestClient`].
///
/// Clients from [`ReqwestHttpClient::with_timeout`] never follow redirects: the signature
/// covers the profile URL only and must not be replayed against another location.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Uses a caller-configured [`ReqwestClient`] as is.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that gives up after `timeout` and does not follow redirects.
	pub fn with_timeout(timeout: StdDuration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).redirect(Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProfileHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn with_metadata(&self, slot: ResponseMetadataSlot) -> Self::Handle {
		ReqwestHandle { client: self.0.clone(), slot }
	}
}

/// Per-request handle handed out by [`ReqwestHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHandle {
	client: ReqwestClient,
	slot: ResponseMetadataSlot,
}
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		Box::pin(async move {
			self.slot.take();

			let outbound = request.try_into().map_err(Box::new)?;
			let reply = self.client.execute(outbound).await.map_err(Box::new)?;
			let status = reply.status();

			self.slot.store(ResponseMetadata { status: Some(status.as_u16()) });

			let mut response = HttpResponse::new(Vec::new());

			*response.status_mut() = status;
			*response.headers_mut() = reply.headers().clone();
			*response.body_mut() = reply.bytes().await.map_err(Box::new)?.to_vec();

			Ok(response)
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn slot_take_clears_previous_metadata() {
		let slot = ResponseMetadataSlot::default();

		slot.store(ResponseMetadata { status: Some(401) });

		assert_eq!(slot.clone().take(), Some(ResponseMetadata { status: Some(401) }));
		assert_eq!(slot.take(), None);
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_handle_future_only_needs_send() {
		fn assert_send<T: Send>(_: &T) {}

		let handle = ReqwestHttpClient::default().with_metadata(ResponseMetadataSlot::default());
		let future = handle.call(HttpRequest::new(Vec::new()));

		assert_send(&future);
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn timeout_client_builds() {
		ReqwestHttpClient::with_timeout(StdDuration::from_secs(3))
			.expect("A timeout-only reqwest client should build.");
	}
}
