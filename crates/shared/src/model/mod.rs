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

pub use self::category::Category;
pub use self::gallery::Gallery;
pub use self::gallery_image::GalleryImage;
pub use self::image::Image;
pub use self::order::Order;
pub use self::order_item::OrderItem;
pub use self::plant::Plant;
pub use self::post::Post;
pub use self::post_rating::PostRating;
pub use self::testimonial::Testimonial;
pub use self::token::Token;
pub use self::user::User;
