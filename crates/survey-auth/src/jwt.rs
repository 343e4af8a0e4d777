use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::AuthError;

/// Claims extracted from a Cognito JWT.
#[derive(Debug, Deserialize)]
pub struct CognitoClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Extract the claims from a token the API Gateway Cognito authorizer has
/// already verified upstream.
///
/// The gateway rejects requests with bad signatures before they reach the
/// Lambda, so the signature is not re-checked here; expiry and `token_use`
/// still are.
pub fn trusted_claims(token: &str) -> Result<CognitoClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = true;

    let token_data = decode::<CognitoClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;

    // Verify token_use is "access" or "id"
    let token_use = &token_data.claims.token_use;
    if token_use != "access" && token_use != "id" {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}
