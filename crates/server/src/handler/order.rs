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
        requests::{CreateOrderRequest, ListQuery, UpdateOrderRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::Order,
    service::OrderService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Validation failed or unknown user")
    ),
    tag = "Order"
)]
pub async fn create_order(
    Extension(service): Extension<OrderService>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Order created", order)),
    ))
}

#[utoipa::path(
    get,
    path = "/orders",
    params(ListQuery),
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<Order>>)
    ),
    tag = "Order"
)]
pub async fn get_orders(
    Extension(service): Extension<OrderService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Orders fetched", orders)),
    ))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn get_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order fetched", order)),
    ))
}

#[utoipa::path(
    patch,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<Order>),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn update_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order updated", order)),
    ))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<Order>),
        (status = 404, description = "Order not found")
    ),
    tag = "Order"
)]
pub async fn delete_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Order deleted", order)),
    ))
}

#[utoipa::path(
    post,
    path = "/orders/bulk",
    request_body = Vec<CreateOrderRequest>,
    responses(
        (status = 201, description = "Orders inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Order"
)]
pub async fn bulk_create_orders(
    Extension(service): Extension<OrderService>,
    Json(body): Json<Vec<CreateOrderRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Orders inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", post(create_order).get(get_orders))
        .route("/orders/bulk", post(bulk_create_orders))
        .route(
            "/orders/{id}",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .layer(Extension(app_state.di_container.order_service.clone()))
}
