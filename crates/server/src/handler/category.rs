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
        requests::{CreateCategoryRequest, ListQuery, UpdateCategoryRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::Category,
    service::CategoryService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation failed or duplicate name")
    ),
    tag = "Category"
)]
pub async fn create_category(
    Extension(service): Extension<CategoryService>,
    ValidatedJson(body): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Category created", category)),
    ))
}

#[utoipa::path(
    get,
    path = "/categories",
    params(ListQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<Category>>)
    ),
    tag = "Category"
)]
pub async fn get_categories(
    Extension(service): Extension<CategoryService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let categories = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Categories fetched", categories)),
    ))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn get_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Category fetched", category)),
    ))
}

#[utoipa::path(
    patch,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn update_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Category updated", category)),
    ))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "Category"
)]
pub async fn delete_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Category deleted", category)),
    ))
}

#[utoipa::path(
    post,
    path = "/categories/bulk",
    request_body = Vec<CreateCategoryRequest>,
    responses(
        (status = 201, description = "Categories inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Category"
)]
pub async fn bulk_create_categories(
    Extension(service): Extension<CategoryService>,
    Json(body): Json<Vec<CreateCategoryRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Categories inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/categories", post(create_category).get(get_categories))
        .route("/categories/bulk", post(bulk_create_categories))
        .route(
            "/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .layer(Extension(app_state.di_container.category_service.clone()))
}
