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
mod token;
mod user;

pub use self::category::CategoryRepository;
pub use self::gallery::GalleryRepository;
pub use self::gallery_image::GalleryImageRepository;
pub use self::image::ImageRepository;
pub use self::order::OrderRepository;
pub use self::order_item::OrderItemRepository;
pub use self::plant::PlantRepository;
pub use self::post::PostRepository;
pub use self::post_rating::PostRatingRepository;
pub use self::testimonial::TestimonialRepository;
pub use self::token::TokenRepository;
pub use self::user::UserRepository;
