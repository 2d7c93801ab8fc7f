//! Core type definitions used across the Chirpy workspace.

pub mod id;

pub use id::UserId;
