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
mod query;
mod testimonial;
mod token;

pub use self::auth::{LoginRequest, NewUser, RegisterRequest};
pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::gallery::{CreateGalleryRequest, UpdateGalleryRequest};
pub use self::gallery_image::{CreateGalleryImageRequest, UpdateGalleryImageRequest};
pub use self::image::{CreateImageRequest, UpdateImageRequest};
pub use self::order::{CreateOrderRequest, UpdateOrderRequest, valid_order_status};
pub use self::order_item::{CreateOrderItemRequest, UpdateOrderItemRequest};
pub use self::plant::{CreatePlantRequest, NewPlant, UpdatePlantRequest};
pub use self::post::{CreatePostRequest, NewPost, UpdatePostRequest, valid_rate_level};
pub use self::post_rating::{CreatePostRatingRequest, UpdatePostRatingRequest};
pub use self::query::{ListQuery, PostListQuery, clamp_limit};
pub use self::testimonial::{CreateTestimonialRequest, UpdateTestimonialRequest};
pub use self::token::CreateToken;
