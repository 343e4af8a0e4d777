use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::{AppState, IdentitySource};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("SURVEY_BUCKET").unwrap_or_else(|_| "survey-app".to_string());

    // Resolved once at startup and injected; nothing below main branches on
    // the environment again.
    let identity_source = match env::var("IDENTITY_SOURCE").as_deref() {
        Ok("local") => IdentitySource::LocalHeader,
        _ => IdentitySource::CognitoClaims,
    };

    let s3 = survey_storage::client::build_client().await;

    let state = AppState {
        s3,
        bucket,
        identity_source,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .route("/surveys", get(routes::surveys::list_surveys))
        .route("/surveys", post(routes::surveys::create_survey))
        .route("/surveys/{surveyId}", get(routes::surveys::get_survey))
        .route("/surveys/{surveyId}", put(routes::surveys::update_survey))
        .route(
            "/surveys/{surveyId}/responses",
            post(routes::responses::submit_response),
        )
        .route(
            "/surveys/{surveyId}/results",
            get(routes::results::get_results),
        )
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::identity::resolve_identity,
        ))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
