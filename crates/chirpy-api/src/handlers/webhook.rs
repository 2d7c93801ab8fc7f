//! Payment provider webhook.

use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, info};

use chirpy_core::error::AppError;
use chirpy_core::types::UserId;

use crate::dto::request::{PolkaWebhookRequest, USER_UPGRADED_EVENT};
use crate::error::ApiError;
use crate::extractors::{ServiceKey, ValidatedJson};
use crate::state::AppState;

/// POST /api/polka/webhooks
///
/// Unknown events are acknowledged and ignored.
pub async fn polka_webhook(
    State(state): State<AppState>,
    _key: ServiceKey,
    ValidatedJson(req): ValidatedJson<PolkaWebhookRequest>,
) -> Result<StatusCode, ApiError> {
    if req.event != USER_UPGRADED_EVENT {
        debug!(event = %req.event, "Ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let data = req
        .data
        .ok_or_else(|| AppError::validation("data.user_id is required"))?;
    let user_id = UserId::from_uuid(data.user_id);

    if !state.users.upgrade(user_id).await? {
        return Err(AppError::not_found("Couldn't find user").into());
    }

    info!(user_id = %user_id, "User upgraded to Chirpy Red");
    Ok(StatusCode::NO_CONTENT)
}
