use crate::{
    handler::upload::{collect_multipart, upload_all},
    middleware::validate::{ValidatedJson, validate_all},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::DynMediaHost,
    domain::{
        requests::{
            CreateGalleryImageRequest, ListQuery, UpdateGalleryImageRequest, clamp_limit,
        },
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::GalleryImage,
    service::GalleryImageService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

const UPLOAD_FOLDER: &str = "gallery";

#[utoipa::path(
    post,
    path = "/gallery-images",
    request_body = CreateGalleryImageRequest,
    responses(
        (status = 201, description = "Gallery image created", body = ApiResponse<GalleryImage>),
        (status = 400, description = "Validation failed or unknown gallery")
    ),
    tag = "GalleryImage"
)]
pub async fn create_gallery_image(
    Extension(service): Extension<GalleryImageService>,
    ValidatedJson(body): ValidatedJson<CreateGalleryImageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Gallery image created", image)),
    ))
}

#[utoipa::path(
    get,
    path = "/gallery-images",
    params(ListQuery),
    responses(
        (status = 200, description = "List of gallery images", body = ApiResponse<Vec<GalleryImage>>)
    ),
    tag = "GalleryImage"
)]
pub async fn get_gallery_images(
    Extension(service): Extension<GalleryImageService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let images = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery images fetched", images)),
    ))
}

#[utoipa::path(
    get,
    path = "/gallery-images/{id}",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    responses(
        (status = 200, description = "Gallery image", body = ApiResponse<GalleryImage>),
        (status = 404, description = "Gallery image not found")
    ),
    tag = "GalleryImage"
)]
pub async fn get_gallery_image(
    Extension(service): Extension<GalleryImageService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery image fetched", image)),
    ))
}

#[utoipa::path(
    patch,
    path = "/gallery-images/{id}",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    request_body = UpdateGalleryImageRequest,
    responses(
        (status = 200, description = "Gallery image updated", body = ApiResponse<GalleryImage>),
        (status = 400, description = "Target gallery does not exist"),
        (status = 404, description = "Gallery image not found")
    ),
    tag = "GalleryImage"
)]
pub async fn update_gallery_image(
    Extension(service): Extension<GalleryImageService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateGalleryImageRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery image updated", image)),
    ))
}

#[utoipa::path(
    delete,
    path = "/gallery-images/{id}",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    responses(
        (status = 200, description = "Gallery image deleted", body = ApiResponse<GalleryImage>),
        (status = 404, description = "Gallery image not found")
    ),
    tag = "GalleryImage"
)]
pub async fn delete_gallery_image(
    Extension(service): Extension<GalleryImageService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let image = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Gallery image deleted", image)),
    ))
}

#[utoipa::path(
    post,
    path = "/gallery-images/bulk",
    request_body = Vec<CreateGalleryImageRequest>,
    responses(
        (status = 201, description = "Gallery images inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "GalleryImage"
)]
pub async fn bulk_create_gallery_images(
    Extension(service): Extension<GalleryImageService>,
    Json(body): Json<Vec<CreateGalleryImageRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Gallery images inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

/// Multipart batch upload: every file goes to the media host first; records
/// are stored only when the whole batch made it.
#[utoipa::path(
    post,
    path = "/gallery-images/upload",
    responses(
        (status = 201, description = "Files uploaded and linked to a gallery", body = ApiResponse<Vec<CreateGalleryImageRequest>>),
        (status = 400, description = "No files in the request"),
        (status = 500, description = "An upload failed; nothing was stored")
    ),
    tag = "GalleryImage"
)]
pub async fn upload_gallery_images(
    Extension(service): Extension<GalleryImageService>,
    Extension(media): Extension<DynMediaHost>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = collect_multipart(multipart, "files").await?;

    if form.files.is_empty() {
        return Err(HttpError::BadRequest("No files uploaded.".into()));
    }

    let assets = upload_all(&media, form.files, UPLOAD_FOLDER).await?;
    let records = service.attach_uploads(&assets).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Files uploaded", records)),
    ))
}

pub fn gallery_image_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/gallery-images",
            post(create_gallery_image).get(get_gallery_images),
        )
        .route("/gallery-images/bulk", post(bulk_create_gallery_images))
        .route("/gallery-images/upload", post(upload_gallery_images))
        .route(
            "/gallery-images/{id}",
            get(get_gallery_image)
                .patch(update_gallery_image)
                .delete(delete_gallery_image),
        )
        .layer(Extension(
            app_state.di_container.gallery_image_service.clone(),
        ))
        .layer(Extension(app_state.di_container.media.clone()))
}
