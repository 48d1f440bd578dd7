use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_favorite_movie::add_favorite_movie;
use super::handlers::authenticate::authenticate;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_director::get_director;
use super::handlers::get_genre::get_genre;
use super::handlers::get_movie::get_movie;
use super::handlers::get_user::get_user;
use super::handlers::list_movies::list_movies;
use super::handlers::list_users::list_users;
use super::handlers::remove_favorite_movie::remove_favorite_movie;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    movie_service: Arc<dyn MovieServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        movie_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(authenticate))
        .route("/users", post(create_user));

    let protected_routes = Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/:username",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/users/:username/movies/:movie_id",
            post(add_favorite_movie).delete(remove_favorite_movie),
        )
        .route("/movies", get(list_movies))
        .route("/movies/:title", get(get_movie))
        .route("/genres/:name", get(get_genre))
        .route("/directors/:name", get(get_director))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(ServiceBuilder::new().layer(trace_layer))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
