//! Request middleware.

pub mod logging;
pub mod metrics;
