//! mindwell-api
//!
//! HTTP surface of the Mindwell service: routing, boundary validation, and
//! the fall-back-to-defaults policy around the document store.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use state::AppState;

/// Build the application router with every route, CORS, and request logging.
pub fn router(state: AppState) -> Router {
    // Any origin, method, and header, with credentials. A literal wildcard
    // cannot be combined with credentials, so the request values are mirrored.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Health
        .route("/", get(routes::health::root))
        .route("/test", get(routes::health::database_status))
        // Assessments
        .route(
            "/api/assessments",
            get(routes::assessments::list_assessments),
        )
        .route(
            "/api/assessments/submit",
            post(routes::assessments::submit_assessment),
        )
        .route(
            "/api/assessments/{key}",
            get(routes::assessments::get_assessment_detail),
        )
        // Mood tracker
        .route("/api/mood", post(routes::mood::add_mood))
        .route("/api/mood/stats", get(routes::mood::mood_stats))
        // Seed content
        .route("/api/resources", get(routes::resources::list_resources))
        .route("/api/team", get(routes::team::list_team))
        // Contact
        .route("/api/contact", post(routes::contact::send_contact))
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
