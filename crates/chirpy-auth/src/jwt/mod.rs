//! Short-lived signed access tokens.

pub mod claims;
pub mod codec;
pub mod ttl;

pub use claims::{AccessClaims, ISSUER};
pub use codec::AccessTokenCodec;
pub use ttl::AccessTtl;
