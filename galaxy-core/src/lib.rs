pub mod booking;
pub mod contact;
pub mod repository;
pub mod session;
pub mod clock;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use contact::{Contact, NewContact};
pub use session::AdminSession;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
    #[error("Session store error: {0}")]
    Session(#[source] BoxError),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn storage<E: Into<BoxError>>(err: E) -> Self {
        Self::Storage(err.into())
    }

    pub fn session<E: Into<BoxError>>(err: E) -> Self {
        Self::Session(err.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
