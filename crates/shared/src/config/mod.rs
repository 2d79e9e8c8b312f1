mod app;
mod database;
mod hashing;
mod jwt;

pub use self::app::{Config, MediaConfig};
pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::hashing::Hashing;
pub use self::jwt::{ACCESS_TOKEN_MINUTES, Claims, JwtConfig, REFRESH_TOKEN_DAYS};
