use crate::{
    handler::upload::{collect_multipart, optional_field, required_field, upload_all},
    middleware::validate::{ValidatedJson, format_validation_errors, validate_all},
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
        requests::{CreatePostRequest, PostListQuery, UpdatePostRequest, clamp_limit,
            valid_rate_level},
        responses::{ApiResponse, BulkInsertResponse, PostDetailResponse},
    },
    errors::HttpError,
    model::Post,
    service::PostService,
};
use std::{collections::HashMap, sync::Arc};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;
use validator::Validate;

const UPLOAD_FOLDER: &str = "posts";

fn parse_post_form(fields: &HashMap<String, String>) -> Result<CreatePostRequest, HttpError> {
    let user_id = required_field(fields, "user_id")?
        .parse::<Uuid>()
        .map_err(|_| HttpError::BadRequest("Invalid UUID for user_id".into()))?;

    Ok(CreatePostRequest {
        title: required_field(fields, "title")?,
        content: optional_field(fields, "content"),
        user_id,
        rating: optional_field(fields, "rating"),
    })
}

#[utoipa::path(
    post,
    path = "/posts",
    request_body(content = CreatePostRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostDetailResponse>),
        (status = 400, description = "Invalid form data or unknown author"),
        (status = 500, description = "Image upload failed")
    ),
    tag = "Post"
)]
pub async fn create_post(
    Extension(service): Extension<PostService>,
    Extension(media): Extension<DynMediaHost>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = collect_multipart(multipart, "images").await?;

    let req = parse_post_form(&form.fields)?;
    req.validate()
        .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

    let uploads = upload_all(&media, form.files, UPLOAD_FOLDER).await?;
    let post = service.create(&req, &uploads).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Post created", post)),
    ))
}

#[utoipa::path(
    get,
    path = "/posts",
    params(PostListQuery),
    responses(
        (status = 200, description = "List of posts", body = ApiResponse<Vec<Post>>),
        (status = 400, description = "Unknown rating filter")
    ),
    tag = "Post"
)]
pub async fn get_posts(
    Extension(service): Extension<PostService>,
    Query(params): Query<PostListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    if let Some(rating) = &params.rating {
        valid_rate_level(rating)
            .map_err(|_| HttpError::BadRequest(format!("Unknown rating: {rating}")))?;
    }

    let posts = service
        .find_all(clamp_limit(params.limit), params.rating.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Posts fetched", posts)),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with images and author", body = ApiResponse<PostDetailResponse>),
        (status = 404, description = "Post not found")
    ),
    tag = "Post"
)]
pub async fn get_post(
    Extension(service): Extension<PostService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let post = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post fetched", post)),
    ))
}

#[utoipa::path(
    patch,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<Post>),
        (status = 404, description = "Post not found")
    ),
    tag = "Post"
)]
pub async fn update_post(
    Extension(service): Extension<PostService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdatePostRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let post = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post updated", post)),
    ))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = ApiResponse<Post>),
        (status = 404, description = "Post not found")
    ),
    tag = "Post"
)]
pub async fn delete_post(
    Extension(service): Extension<PostService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let post = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Post deleted", post)),
    ))
}

#[utoipa::path(
    post,
    path = "/posts/bulk",
    request_body = Vec<CreatePostRequest>,
    responses(
        (status = 201, description = "Posts inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Post"
)]
pub async fn bulk_create_posts(
    Extension(service): Extension<PostService>,
    Json(body): Json<Vec<CreatePostRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Posts inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn post_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/posts", post(create_post).get(get_posts))
        .route("/posts/bulk", post(bulk_create_posts))
        .route(
            "/posts/{id}",
            get(get_post).patch(update_post).delete(delete_post),
        )
        .layer(Extension(app_state.di_container.post_service.clone()))
        .layer(Extension(app_state.di_container.media.clone()))
}
