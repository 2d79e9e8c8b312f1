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
        requests::{CreateTestimonialRequest, ListQuery, UpdateTestimonialRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse},
    },
    errors::HttpError,
    model::Testimonial,
    service::TestimonialService,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created", body = ApiResponse<Testimonial>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Testimonial"
)]
pub async fn create_testimonial(
    Extension(service): Extension<TestimonialService>,
    ValidatedJson(body): ValidatedJson<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonial = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Testimonial created", testimonial)),
    ))
}

#[utoipa::path(
    get,
    path = "/testimonials",
    params(ListQuery),
    responses(
        (status = 200, description = "List of testimonials", body = ApiResponse<Vec<Testimonial>>)
    ),
    tag = "Testimonial"
)]
pub async fn get_testimonials(
    Extension(service): Extension<TestimonialService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonials = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Testimonials fetched", testimonials)),
    ))
}

#[utoipa::path(
    get,
    path = "/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial", body = ApiResponse<Testimonial>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "Testimonial"
)]
pub async fn get_testimonial(
    Extension(service): Extension<TestimonialService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonial = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Testimonial fetched", testimonial)),
    ))
}

#[utoipa::path(
    patch,
    path = "/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    request_body = UpdateTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated", body = ApiResponse<Testimonial>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "Testimonial"
)]
pub async fn update_testimonial(
    Extension(service): Extension<TestimonialService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonial = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Testimonial updated", testimonial)),
    ))
}

#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted", body = ApiResponse<Testimonial>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "Testimonial"
)]
pub async fn delete_testimonial(
    Extension(service): Extension<TestimonialService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonial = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Testimonial deleted", testimonial)),
    ))
}

#[utoipa::path(
    post,
    path = "/testimonials/bulk",
    request_body = Vec<CreateTestimonialRequest>,
    responses(
        (status = 201, description = "Testimonials inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Testimonial"
)]
pub async fn bulk_create_testimonials(
    Extension(service): Extension<TestimonialService>,
    Json(body): Json<Vec<CreateTestimonialRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Testimonials inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn testimonial_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/testimonials",
            post(create_testimonial).get(get_testimonials),
        )
        .route("/testimonials/bulk", post(bulk_create_testimonials))
        .route(
            "/testimonials/{id}",
            get(get_testimonial)
                .patch(update_testimonial)
                .delete(delete_testimonial),
        )
        .layer(Extension(
            app_state.di_container.testimonial_service.clone(),
        ))
}
