//! Auth-domain identifiers, credentials, and normalized identities.

pub mod credential;
pub mod id;
pub mod identity;
pub mod secret;

pub use credential::*;
pub use id::*;
pub use identity::*;
pub use secret::*;
