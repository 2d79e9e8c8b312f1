mod gracefullshutdown;
mod logs;
mod slug;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::slug::slugify;
