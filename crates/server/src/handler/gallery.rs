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
        requests::{CreateGalleryRequest, ListQuery, UpdateGalleryRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::Gallery,
    service::GalleryService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/galleries",
    request_body = CreateGalleryRequest,
    responses(
        (status = 201, description = "Gallery created", body = ApiResponse<Gallery>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Gallery"
)]
pub async fn create_gallery(
    Extension(service): Extension<GalleryService>,
    ValidatedJson(body): ValidatedJson<CreateGalleryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let gallery = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Gallery created", gallery)),
    ))
}

#[utoipa::path(
    get,
    path = "/galleries",
    params(ListQuery),
    responses(
        (status = 200, description = "List of galleries", body = ApiResponse<Vec<Gallery>>)
    ),
    tag = "Gallery"
)]
pub async fn get_galleries(
    Extension(service): Extension<GalleryService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let galleries = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Galleries fetched", galleries)),
    ))
}

#[utoipa::path(
    get,
    path = "/galleries/{id}",
    params(("id" = Uuid, Path, description = "Gallery id")),
    responses(
        (status = 200, description = "Gallery", body = ApiResponse<Gallery>),
        (status = 404, description = "Gallery not found")
    ),
    tag = "Gallery"
)]
pub async fn get_gallery(
    Extension(service): Extension<GalleryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let gallery = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery fetched", gallery)),
    ))
}

#[utoipa::path(
    patch,
    path = "/galleries/{id}",
    params(("id" = Uuid, Path, description = "Gallery id")),
    request_body = UpdateGalleryRequest,
    responses(
        (status = 200, description = "Gallery updated", body = ApiResponse<Gallery>),
        (status = 404, description = "Gallery not found")
    ),
    tag = "Gallery"
)]
pub async fn update_gallery(
    Extension(service): Extension<GalleryService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateGalleryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let gallery = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery updated", gallery)),
    ))
}

#[utoipa::path(
    delete,
    path = "/galleries/{id}",
    params(("id" = Uuid, Path, description = "Gallery id")),
    responses(
        (status = 200, description = "Gallery deleted", body = ApiResponse<Gallery>),
        (status = 404, description = "Gallery not found")
    ),
    tag = "Gallery"
)]
pub async fn delete_gallery(
    Extension(service): Extension<GalleryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let gallery = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery deleted", gallery)),
    ))
}

#[utoipa::path(
    post,
    path = "/galleries/bulk",
    request_body = Vec<CreateGalleryRequest>,
    responses(
        (status = 201, description = "Galleries inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Gallery"
)]
pub async fn bulk_create_galleries(
    Extension(service): Extension<GalleryService>,
    Json(body): Json<Vec<CreateGalleryRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Galleries inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn gallery_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/galleries", post(create_gallery).get(get_galleries))
        .route("/galleries/bulk", post(bulk_create_galleries))
        .route(
            "/galleries/{id}",
            get(get_gallery)
                .patch(update_gallery)
                .delete(delete_gallery),
        )
        .layer(Extension(app_state.di_container.gallery_service.clone()))
}
