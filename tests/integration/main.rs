//! HTTP-level integration tests driving the router in-process.

mod account_test;
mod admin_test;
mod auth_test;
mod helpers;
mod webhook_test;
