pub mod auth;
mod category;
mod gallery;
mod gallery_image;
mod image;
mod order;
mod order_item;
mod plant;
mod post;
mod post_rating;
mod testimonial;
mod upload;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use shared::config::Config;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::category::category_routes;
pub use self::gallery::gallery_routes;
pub use self::gallery_image::gallery_image_routes;
pub use self::image::image_routes;
pub use self::order::order_routes;
pub use self::order_item::order_item_routes;
pub use self::plant::plant_routes;
pub use self::post::post_routes;
pub use self::post_rating::post_rating_routes;
pub use self::testimonial::testimonial_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::signup_handler,
        auth::login_handler,
        auth::refresh_handler,
        auth::logout_handler,
        auth::get_profile_handler,

        plant::create_plant,
        plant::get_plants,
        plant::get_plant,
        plant::update_plant,
        plant::delete_plant,
        plant::bulk_create_plants,

        post::create_post,
        post::get_posts,
        post::get_post,
        post::update_post,
        post::delete_post,
        post::bulk_create_posts,

        category::create_category,
        category::get_categories,
        category::get_category,
        category::update_category,
        category::delete_category,
        category::bulk_create_categories,

        image::create_image,
        image::get_images,
        image::get_image,
        image::update_image,
        image::delete_image,
        image::bulk_create_images,

        gallery::create_gallery,
        gallery::get_galleries,
        gallery::get_gallery,
        gallery::update_gallery,
        gallery::delete_gallery,
        gallery::bulk_create_galleries,

        gallery_image::create_gallery_image,
        gallery_image::get_gallery_images,
        gallery_image::get_gallery_image,
        gallery_image::update_gallery_image,
        gallery_image::delete_gallery_image,
        gallery_image::bulk_create_gallery_images,
        gallery_image::upload_gallery_images,

        testimonial::create_testimonial,
        testimonial::get_testimonials,
        testimonial::get_testimonial,
        testimonial::update_testimonial,
        testimonial::delete_testimonial,
        testimonial::bulk_create_testimonials,

        order::create_order,
        order::get_orders,
        order::get_order,
        order::update_order,
        order::delete_order,
        order::bulk_create_orders,

        order_item::create_order_item,
        order_item::get_order_items,
        order_item::get_order_item,
        order_item::update_order_item,
        order_item::delete_order_item,
        order_item::bulk_create_order_items,

        post_rating::create_post_rating,
        post_rating::get_post_ratings,
        post_rating::get_post_rating,
        post_rating::update_post_rating,
        post_rating::delete_post_rating,
        post_rating::bulk_create_post_ratings,
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Plant", description = "Plant catalog endpoints"),
        (name = "Post", description = "Blog post endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Image", description = "Image record endpoints"),
        (name = "Gallery", description = "Gallery endpoints"),
        (name = "GalleryImage", description = "Gallery image endpoints"),
        (name = "Testimonial", description = "Testimonial endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "OrderItem", description = "Order item endpoints"),
        (name = "PostRating", description = "Post rating endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(config: &Config, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        // one configured browser origin, with credentials so the auth
        // cookies travel along
        let cors = CorsLayer::new()
            .allow_origin(
                config
                    .cors_origin
                    .parse::<HeaderValue>()
                    .context("CORS_ORIGIN is not a valid origin")?,
            )
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(plant_routes(shared_state.clone()))
            .merge(post_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(image_routes(shared_state.clone()))
            .merge(gallery_routes(shared_state.clone()))
            .merge(gallery_image_routes(shared_state.clone()))
            .merge(testimonial_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_item_routes(shared_state.clone()))
            .merge(post_rating_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(50 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{}/swagger-ui", config.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
