//! API handlers for the books REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON request body extractor.
///
/// Decodes the first JSON value of the body whatever its `Content-Type`;
/// anything after that value is ignored. Any failure to read or decode the
/// body is reported as a 400 with the usual error body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            invalid_payload()
        })?;

        decode_first(&bytes).map(JsonBody)
    }
}

fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => {
            tracing::debug!("Failed to decode request body: {}", e);
            Err(invalid_payload())
        }
        None => {
            tracing::debug!("Empty request body");
            Err(invalid_payload())
        }
    }
}

fn invalid_payload() -> AppError {
    AppError::BadRequest("Invalid request payload".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.config.server.request_timeout();

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
