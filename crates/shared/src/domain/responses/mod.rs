mod api;
mod bulk;
mod plant;
mod post;
mod token;
mod user;

pub use self::api::{ApiResponse, MessageResponse};
pub use self::bulk::BulkInsertResponse;
pub use self::plant::PlantDetailResponse;
pub use self::post::PostDetailResponse;
pub use self::token::TokenPair;
pub use self::user::UserResponse;
