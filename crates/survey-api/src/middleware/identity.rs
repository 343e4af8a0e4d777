use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::{AppState, IdentitySource};

/// The resolved caller identity, inserted into request extensions for
/// handlers to pick up. `None` means anonymous — handlers that require a
/// caller return 401 themselves.
#[derive(Clone, Debug)]
pub struct Caller(pub Option<String>);

/// Identity-resolution middleware.
///
/// How the caller id is obtained depends on the [`IdentitySource`]
/// configured at startup; nothing downstream branches on it again.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let caller = match state.identity_source {
        IdentitySource::LocalHeader => req
            .headers()
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        IdentitySource::CognitoClaims => bearer_sub(req.headers()),
    };

    if let Some(id) = &caller {
        tracing::debug!(user_id = %id, "caller identity resolved");
    }

    req.extensions_mut().insert(Caller(caller));
    next.run(req).await
}

/// Caller id from the `sub` claim of the bearer token. The API Gateway
/// Cognito authorizer has already verified the token; an absent or
/// unparseable token just means an anonymous caller.
fn bearer_sub(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization")?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;

    match survey_auth::jwt::trusted_claims(token) {
        Ok(claims) => Some(claims.sub),
        Err(e) => {
            tracing::warn!(error = %e, "bearer token rejected");
            None
        }
    }
}
