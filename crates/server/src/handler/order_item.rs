use crate::{
    middleware::validate::{ValidatedJson, validate_all},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        requests::{CreateOrderItemRequest, ListQuery, UpdateOrderItemRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::OrderItem,
    service::OrderItemService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/order-items",
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Order item created", body = ApiResponse<OrderItem>),
        (status = 400, description = "Validation failed or unknown order/plant")
    ),
    tag = "OrderItem"
)]
pub async fn create_order_item(
    Extension(service): Extension<OrderItemService>,
    ValidatedJson(body): ValidatedJson<CreateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Order item created", item)),
    ))
}

#[utoipa::path(
    get,
    path = "/order-items",
    params(ListQuery),
    responses(
        (status = 200, description = "List of order items", body = ApiResponse<Vec<OrderItem>>)
    ),
    tag = "OrderItem"
)]
pub async fn get_order_items(
    Extension(service): Extension<OrderItemService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order items fetched", items)),
    ))
}

#[utoipa::path(
    get,
    path = "/order-items/{id}",
    params(("id" = Uuid, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item", body = ApiResponse<OrderItem>),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn get_order_item(
    Extension(service): Extension<OrderItemService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order item fetched", item)),
    ))
}

#[utoipa::path(
    patch,
    path = "/order-items/{id}",
    params(("id" = Uuid, Path, description = "Order item id")),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated", body = ApiResponse<OrderItem>),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn update_order_item(
    Extension(service): Extension<OrderItemService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order item updated", item)),
    ))
}

#[utoipa::path(
    delete,
    path = "/order-items/{id}",
    params(("id" = Uuid, Path, description = "Order item id")),
    responses(
        (status = 200, description = "Order item deleted", body = ApiResponse<OrderItem>),
        (status = 404, description = "Order item not found")
    ),
    tag = "OrderItem"
)]
pub async fn delete_order_item(
    Extension(service): Extension<OrderItemService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order item deleted", item)),
    ))
}

#[utoipa::path(
    post,
    path = "/order-items/bulk",
    request_body = Vec<CreateOrderItemRequest>,
    responses(
        (status = 201, description = "Order items inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "OrderItem"
)]
pub async fn bulk_create_order_items(
    Extension(service): Extension<OrderItemService>,
    Json(body): Json<Vec<CreateOrderItemRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Order items inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn order_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/order-items",
            post(create_order_item).get(get_order_items),
        )
        .route("/order-items/bulk", post(bulk_create_order_items))
        .route(
            "/order-items/{id}",
            get(get_order_item)
                .patch(update_order_item)
                .delete(delete_order_item),
        )
        .layer(Extension(app_state.di_container.order_item_service.clone()))
}
