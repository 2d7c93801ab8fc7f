//! `Authorization` header credentials.

pub mod extractor;
pub mod service_key;

pub use extractor::{Credential, CredentialScheme, extract, extract_api_key, extract_bearer};
pub use service_key::ServiceKeyVerifier;
