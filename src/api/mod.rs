//! API layer - HTTP handlers and routing
//!
//! One module per resource, plus shared middleware. The router is built
//! explicitly at startup with protected routes gated by the bearer-token
//! middleware.

pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod faqs;
pub mod middleware;

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use middleware::{ApiError, AppState};

/// Build the main API router
pub fn build_api_router(state: AppState) -> Router<AppState> {
    // Routes that require a bearer token
    let mut protected_routes = Router::new()
        .route("/articles", post(articles::create_article))
        .route("/articles/{id}", put(articles::update_article))
        .route("/articles/{id}", axum::routing::delete(articles::delete_article))
        .route("/articles/{id}/comments", post(comments::create_comment))
        .route("/faqs", post(faqs::create_faq))
        .route("/faqs/{id}", put(faqs::update_faq))
        .route("/faqs/{id}", axum::routing::delete(faqs::delete_faq));

    // Category creation is open by default; the deployment can opt in to
    // requiring a token.
    let mut public_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/password_reset", post(auth::password_reset))
        .route("/articles", get(articles::list_articles))
        .route("/articles/{id}", get(articles::get_article))
        .route("/articles/{id}/comments", get(comments::list_comments))
        .route("/categories", get(categories::list_categories))
        .route("/faqs", get(faqs::list_faqs))
        .route("/faqs/{id}", get(faqs::get_faq));

    if state.auth_config.protect_category_writes {
        protected_routes = protected_routes.route("/categories", post(categories::create_category));
    } else {
        public_routes = public_routes.route("/categories", post(categories::create_category));
    }

    let protected_routes = protected_routes.route_layer(axum_middleware::from_fn_with_state(
        state,
        middleware::require_auth,
    ));

    public_routes.merge(protected_routes)
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if let Ok(origin) = cors_origin.parse::<HeaderValue>() {
        cors = cors.allow_origin(origin);
    }

    Router::new()
        .merge(build_api_router(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
