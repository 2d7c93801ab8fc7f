//! Login, refresh, revoke and authenticate flows.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
