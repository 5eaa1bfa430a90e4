//! # Request Layer
//!
//! The HTTP surface of the shop, built on `axum`.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/products/add_product` | register a product |
//! | POST | `/cart/add_items` | add an item |
//! | DELETE | `/cart/remove/:item_id` | remove one item |
//! | DELETE | `/cart/remove` | empty the cart |
//! | PUT | `/cart/update` | change a quantity |
//! | POST | `/cart/discount` | discount an item |
//! | GET | `/cart/view` | view the cart |
//! | POST | `/cart/checkout` | check out |
//!
//! Failures answer `{"error": "<message>"}` with the status from
//! [`CartError::status_code`].

pub mod dto;
pub mod handlers;

use crate::engine::{CartError, CartHandle};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

/// Build the axum router (separated for testing).
pub fn router(cart: CartHandle) -> Router {
    Router::new()
        .route("/products/add_product", post(handlers::add_product))
        .route("/cart/add_items", post(handlers::add_item))
        .route("/cart/remove/:item_id", delete(handlers::remove_item))
        .route("/cart/remove", delete(handlers::remove_all_items))
        .route("/cart/update", put(handlers::update_quantity))
        .route("/cart/discount", post(handlers::apply_discount))
        .route("/cart/view", get(handlers::view_cart))
        .route("/cart/checkout", post(handlers::checkout))
        .with_state(cart)
}

/// Error body and status of a failed request.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        let status = e.status_code();
        if status.is_server_error() {
            warn!(error = %e, "Request failed");
        }
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
