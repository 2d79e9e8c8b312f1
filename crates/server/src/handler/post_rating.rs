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
        requests::{CreatePostRatingRequest, ListQuery, UpdatePostRatingRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::PostRating,
    service::PostRatingService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/postratings",
    request_body = CreatePostRatingRequest,
    responses(
        (status = 201, description = "Post rating created", body = ApiResponse<PostRating>),
        (status = 400, description = "Validation failed or unknown post/user")
    ),
    tag = "PostRating"
)]
pub async fn create_post_rating(
    Extension(service): Extension<PostRatingService>,
    ValidatedJson(body): ValidatedJson<CreatePostRatingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let rating = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Post rating created", rating)),
    ))
}

#[utoipa::path(
    get,
    path = "/postratings",
    params(ListQuery),
    responses(
        (status = 200, description = "List of post ratings", body = ApiResponse<Vec<PostRating>>)
    ),
    tag = "PostRating"
)]
pub async fn get_post_ratings(
    Extension(service): Extension<PostRatingService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let ratings = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post ratings fetched", ratings)),
    ))
}

#[utoipa::path(
    get,
    path = "/postratings/{id}",
    params(("id" = Uuid, Path, description = "Post rating id")),
    responses(
        (status = 200, description = "Post rating", body = ApiResponse<PostRating>),
        (status = 404, description = "Post rating not found")
    ),
    tag = "PostRating"
)]
pub async fn get_post_rating(
    Extension(service): Extension<PostRatingService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let rating = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post rating fetched", rating)),
    ))
}

#[utoipa::path(
    patch,
    path = "/postratings/{id}",
    params(("id" = Uuid, Path, description = "Post rating id")),
    request_body = UpdatePostRatingRequest,
    responses(
        (status = 200, description = "Post rating updated", body = ApiResponse<PostRating>),
        (status = 404, description = "Post rating not found")
    ),
    tag = "PostRating"
)]
pub async fn update_post_rating(
    Extension(service): Extension<PostRatingService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdatePostRatingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let rating = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post rating updated", rating)),
    ))
}

#[utoipa::path(
    delete,
    path = "/postratings/{id}",
    params(("id" = Uuid, Path, description = "Post rating id")),
    responses(
        (status = 200, description = "Post rating deleted", body = ApiResponse<PostRating>),
        (status = 404, description = "Post rating not found")
    ),
    tag = "PostRating"
)]
pub async fn delete_post_rating(
    Extension(service): Extension<PostRatingService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let rating = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post rating deleted", rating)),
    ))
}

#[utoipa::path(
    post,
    path = "/postratings/bulk",
    request_body = Vec<CreatePostRatingRequest>,
    responses(
        (status = 201, description = "Post ratings inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "PostRating"
)]
pub async fn bulk_create_post_ratings(
    Extension(service): Extension<PostRatingService>,
    Json(body): Json<Vec<CreatePostRatingRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Post ratings inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn post_rating_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/postratings",
            post(create_post_rating).get(get_post_ratings),
        )
        .route("/postratings/bulk", post(bulk_create_post_ratings))
        .route(
            "/postratings/{id}",
            get(get_post_rating)
                .patch(update_post_rating)
                .delete(delete_post_rating),
        )
        .layer(Extension(
            app_state.di_container.post_rating_service.clone(),
        ))
}
