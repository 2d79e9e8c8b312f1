use crate::{
    handler::upload::{
        collect_multipart, optional_field, parse_i32_field, parse_i64_field, parse_optional_uuid,
        required_field, upload_all,
    },
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
        requests::{CreatePlantRequest, ListQuery, UpdatePlantRequest, clamp_limit},
        responses::{ApiResponse, BulkInsertResponse, PlantDetailResponse},
    },
    errors::HttpError,
    model::Plant,
    service::PlantService,
};
use std::{collections::HashMap, sync::Arc};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;
use validator::Validate;

const UPLOAD_FOLDER: &str = "plants";

fn parse_plant_form(fields: &HashMap<String, String>) -> Result<CreatePlantRequest, HttpError> {
    Ok(CreatePlantRequest {
        name: required_field(fields, "name")?,
        description: optional_field(fields, "description"),
        price: parse_i64_field(fields, "price")?,
        stock: parse_i32_field(fields, "stock")?,
        category_id: parse_optional_uuid(fields, "category_id")?,
        image_url: optional_field(fields, "image_url"),
    })
}

#[utoipa::path(
    post,
    path = "/plants",
    request_body(content = CreatePlantRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Plant created", body = ApiResponse<PlantDetailResponse>),
        (status = 400, description = "Invalid form data"),
        (status = 500, description = "Image upload failed")
    ),
    tag = "Plant"
)]
pub async fn create_plant(
    Extension(service): Extension<PlantService>,
    Extension(media): Extension<DynMediaHost>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = collect_multipart(multipart, "images").await?;

    let req = parse_plant_form(&form.fields)?;
    req.validate()
        .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

    let uploads = upload_all(&media, form.files, UPLOAD_FOLDER).await?;
    let plant = service.create(&req, &uploads).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Plant created", plant)),
    ))
}

#[utoipa::path(
    get,
    path = "/plants",
    params(ListQuery),
    responses(
        (status = 200, description = "List of plants", body = ApiResponse<Vec<Plant>>)
    ),
    tag = "Plant"
)]
pub async fn get_plants(
    Extension(service): Extension<PlantService>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let plants = service.find_all(clamp_limit(params.limit)).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Plants fetched", plants)),
    ))
}

#[utoipa::path(
    get,
    path = "/plants/{id}",
    params(("id" = Uuid, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Plant with images and category", body = ApiResponse<PlantDetailResponse>),
        (status = 404, description = "Plant not found")
    ),
    tag = "Plant"
)]
pub async fn get_plant(
    Extension(service): Extension<PlantService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let plant = service.find_one(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Plant fetched", plant)),
    ))
}

#[utoipa::path(
    patch,
    path = "/plants/{id}",
    params(("id" = Uuid, Path, description = "Plant id")),
    request_body = UpdatePlantRequest,
    responses(
        (status = 200, description = "Plant updated", body = ApiResponse<Plant>),
        (status = 404, description = "Plant not found")
    ),
    tag = "Plant"
)]
pub async fn update_plant(
    Extension(service): Extension<PlantService>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdatePlantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let plant = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Plant updated", plant)),
    ))
}

#[utoipa::path(
    delete,
    path = "/plants/{id}",
    params(("id" = Uuid, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Plant deleted", body = ApiResponse<Plant>),
        (status = 404, description = "Plant not found")
    ),
    tag = "Plant"
)]
pub async fn delete_plant(
    Extension(service): Extension<PlantService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let plant = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Plant deleted", plant)),
    ))
}

#[utoipa::path(
    post,
    path = "/plants/bulk",
    request_body = Vec<CreatePlantRequest>,
    responses(
        (status = 201, description = "Plants inserted, duplicates skipped", body = ApiResponse<BulkInsertResponse>)
    ),
    tag = "Plant"
)]
pub async fn bulk_create_plants(
    Extension(service): Extension<PlantService>,
    Json(body): Json<Vec<CreatePlantRequest>>,
) -> Result<impl IntoResponse, HttpError> {
    validate_all(&body)?;

    let inserted = service.bulk_create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Plants inserted",
            BulkInsertResponse { inserted },
        )),
    ))
}

pub fn plant_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/plants", post(create_plant).get(get_plants))
        .route("/plants/bulk", post(bulk_create_plants))
        .route(
            "/plants/{id}",
            get(get_plant).patch(update_plant).delete(delete_plant),
        )
        .layer(Extension(app_state.di_container.plant_service.clone()))
        .layer(Extension(app_state.di_container.media.clone()))
}
