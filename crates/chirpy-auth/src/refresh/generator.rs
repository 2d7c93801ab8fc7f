//! Opaque refresh token values.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::AuthError;

/// Bytes of OS randomness behind each token (256 bits).
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Returns 64 lowercase hex characters drawn from the OS CSPRNG.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::RandomnessUnavailable(e.to_string()))?;
    Ok(hex::encode(bytes))
}
