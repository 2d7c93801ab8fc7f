//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Webhook event that upgrades an account to Chirpy Red.
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Account creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Credential replacement body for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// New plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login body. Email format is not checked so that every bad login looks alike.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Payment provider webhook body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PolkaWebhookRequest {
    /// Event name; only [`USER_UPGRADED_EVENT`] has an effect.
    pub event: String,
    /// Event payload.
    #[serde(default)]
    pub data: Option<PolkaWebhookData>,
}

/// Payload of a webhook event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolkaWebhookData {
    /// Account the event refers to.
    pub user_id: Uuid,
}
