pub mod app_config;
pub mod database;
pub mod booking_repo;
pub mod contact_repo;
pub mod session_store;
pub mod redis_repo;

pub use database::DbClient;
pub use booking_repo::PgBookingRepository;
pub use contact_repo::PgContactRepository;
pub use session_store::MemorySessionStore;
pub use redis_repo::RedisSessionStore;
