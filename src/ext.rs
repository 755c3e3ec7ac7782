//! Public extension contracts consumed by the resolver (request signing, identity building).
//!
//! The resolver depends on these traits only. `oauth1` ships a default signer and
//! [`BasicIdentityBuilder`] hands identities back untouched, so hosts replace exactly the
//! piece they need to customize.

pub mod identity_builder;
pub mod request_signer;

pub use identity_builder::*;
pub use request_signer::*;
