mod category;
mod gallery;
mod gallery_image;
mod hashing;
mod image;
mod jwt;
mod media;
mod order;
mod order_item;
mod plant;
mod post;
mod post_rating;
mod testimonial;
mod token;
mod user;

pub use self::category::{CategoryRepositoryTrait, DynCategoryRepository};
pub use self::gallery::{DynGalleryRepository, GalleryRepositoryTrait};
pub use self::gallery_image::{DynGalleryImageRepository, GalleryImageRepositoryTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::image::{DynImageRepository, ImageRepositoryTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::media::{DynMediaHost, MediaHostTrait};
pub use self::order::{DynOrderRepository, OrderRepositoryTrait};
pub use self::order_item::{DynOrderItemRepository, OrderItemRepositoryTrait};
pub use self::plant::{DynPlantRepository, PlantRepositoryTrait};
pub use self::post::{DynPostRepository, PostRepositoryTrait};
pub use self::post_rating::{DynPostRatingRepository, PostRatingRepositoryTrait};
pub use self::testimonial::{DynTestimonialRepository, TestimonialRepositoryTrait};
pub use self::token::{DynTokenRepository, TokenRepositoryTrait};
pub use self::user::{DynUserRepository, UserRepositoryTrait};
