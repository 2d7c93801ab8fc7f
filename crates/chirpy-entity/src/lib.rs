//! # chirpy-entity
//!
//! Domain entity models for Chirpy: user accounts and the durable
//! refresh-token record.

pub mod session;
pub mod user;
