//! One handler per route. Each translates the request, calls the [`CartHandle`] and shapes
//! the JSON answer.

use super::dto::{self, AddItemRequest, DiscountRequest, UpdateQuantityRequest};
use super::ApiError;
use crate::engine::CartHandle;
use crate::model::{ProductCreate, ProductId};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

type ApiResult = Result<Json<Value>, ApiError>;

fn body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, ApiError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ApiError::bad_request(message)
    })
}

pub async fn add_product(
    State(cart): State<CartHandle>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> ApiResult {
    let product = body(payload, "bad request")?;
    cart.register_product(product.clone()).await?;
    Ok(Json(json!({
        "message": "Product added successfully",
        "products": product,
    })))
}

pub async fn add_item(
    State(cart): State<CartHandle>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult {
    let request = body(payload, "Bad request")?;
    let quantity = dto::quantity(request.quantity)?;
    let total = cart.add_item(request.product_id, quantity).await?;
    Ok(Json(json!({
        "message": "items successfully added to the cart",
        "total_items_added": total,
        "added_product": request,
    })))
}

pub async fn remove_item(State(cart): State<CartHandle>, Path(item_id): Path<String>) -> ApiResult {
    let item_id: u32 = item_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid itemID"))?;
    cart.remove_item(ProductId(item_id)).await?;
    Ok(Json(json!({ "message": "Item removed from cart" })))
}

pub async fn remove_all_items(State(cart): State<CartHandle>) -> ApiResult {
    cart.remove_all_items().await?;
    Ok(Json(json!({ "message": "All items removed from the cart" })))
}

pub async fn update_quantity(
    State(cart): State<CartHandle>,
    payload: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> ApiResult {
    let request = body(
        payload,
        "Invalid input, please check the item ID and quantity format",
    )?;
    let quantity = dto::quantity(request.quantity)?;
    cart.update_quantity(request.item_id, quantity).await?;
    Ok(Json(json!({ "message": "Item's quantity is updated!" })))
}

pub async fn apply_discount(
    State(cart): State<CartHandle>,
    payload: Result<Json<DiscountRequest>, JsonRejection>,
) -> ApiResult {
    let request = body(payload, "Invalid request")?;
    let new_price = cart
        .apply_discount(
            request.discount_type.clone(),
            request.discount,
            request.item_id,
        )
        .await?;
    Ok(Json(json!({
        "message": format!(
            "{:.2} {} discount applied to item {}",
            request.discount, request.discount_type, request.item_id.0
        ),
        "newPrice": new_price,
    })))
}

pub async fn view_cart(State(cart): State<CartHandle>) -> ApiResult {
    let view = cart.view_cart().await?;
    Ok(Json(json!({
        "items": view.items,
        "totalPrice": view.total_price,
    })))
}

pub async fn checkout(State(cart): State<CartHandle>) -> ApiResult {
    let view = cart.checkout().await?;
    Ok(Json(json!({
        "message": "Checkout is successful!",
        "items": view.items,
        "totalPrice": view.total_price,
    })))
}
