use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub identity_source: IdentitySource,
}

/// Where the caller's identity comes from. Resolved once at startup from
/// configuration; request handling never inspects the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentitySource {
    /// Local / LocalStack development: caller id from the `x-user-id`
    /// request header.
    LocalHeader,
    /// Deployed behind an API Gateway Cognito authorizer: caller id from
    /// the `sub` claim of the bearer token.
    CognitoClaims,
}
