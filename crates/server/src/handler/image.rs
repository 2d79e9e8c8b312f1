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
        requests::{CreateImageRequest, ListQuery, UpdateImageRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::Image,
    service::ImageService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/images",
    request_body = CreateImageRequest,
    responses(
        (status = 201, description = "Image record created", body = ApiResponse<Image>),
        (status = 400, description = "Validation failed or invalid reference")
    ),
    tag = "Image"
)]
pub async fn create_image(
    Extension(service): Extension<ImageService>,
    ValidatedJson(body): ValidatedJson<CreateImageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Image created", image)),
    ))
}

#[utoipa::path(
    get,
    path = "/images",
    params(ListQuery),
    responses(
        (status = 200, description = "List of images", body = ApiResponse<Vec<Image>>)
    ),
    tag = "Image"
)]
pub async fn get_images(
    Extension(service): Extension<ImageService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let images = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Images fetched", images)),
    ))
}

#[utoipa::path(
    get,
    path = "/images/{id}",
    params(("id" = Uuid, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image", body = ApiResponse<Image>),
        (status = 404, description = "Image not found")
    ),
    tag = "Image"
)]
pub async fn get_image(
    Extension(service): Extension<ImageService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Image fetched", image)),
    ))
}

#[utoipa::path(
    patch,
    path = "/images/{id}",
    params(("id" = Uuid, Path, description = "Image id")),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "Image updated", body = ApiResponse<Image>),
        (status = 404, description = "Image not found")
    ),
    tag = "Image"
)]
pub async fn update_image(
    Extension(service): Extension<ImageService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateImageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Image updated", image)),
    ))
}

#[utoipa::path(
    delete,
    path = "/images/{id}",
    params(("id" = Uuid, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image deleted", body = ApiResponse<Image>),
        (status = 404, description = "Image not found")
    ),
    tag = "Image"
)]
pub async fn delete_image(
    Extension(service): Extension<ImageService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Image deleted", image)),
    ))
}

#[utoipa::path(
    post,
    path = "/images/bulk",
    request_body = Vec<CreateImageRequest>,
    responses(
        (status = 201, description = "Images inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Image"
)]
pub async fn bulk_create_images(
    Extension(service): Extension<ImageService>,
    Json(body): Json<Vec<CreateImageRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Images inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn image_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/images", post(create_image).get(get_images))
        .route("/images/bulk", post(bulk_create_images))
        .route(
            "/images/{id}",
            get(get_image).patch(update_image).delete(delete_image),
        )
        .layer(Extension(app_state.di_container.image_service.clone()))
}
