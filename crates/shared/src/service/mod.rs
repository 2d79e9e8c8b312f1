mod auth;
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

pub use self::auth::AuthService;
pub use self::category::CategoryService;
pub use self::gallery::GalleryService;
pub use self::gallery_image::GalleryImageService;
pub use self::image::ImageService;
pub use self::order::OrderService;
pub use self::order_item::OrderItemService;
pub use self::plant::PlantService;
pub use self::post::PostService;
pub use self::post_rating::PostRatingService;
pub use self::testimonial::TestimonialService;
