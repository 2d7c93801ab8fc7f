//! Wire schemas, decoupled from the storage entities.

pub mod request;
pub mod response;
