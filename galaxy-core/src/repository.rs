use async_trait::async_trait;
use crate::{AdminSession, Booking, Contact, CoreResult, NewBooking, NewContact};

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking with the given status and return the stored row.
    async fn create_booking(
        &self,
        booking: &NewBooking,
        status: &str,
    ) -> CoreResult<Booking>;

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>>;

    /// Returns `None` when no row has the given id.
    async fn update_booking_status(
        &self,
        id: i32,
        status: &str,
    ) -> CoreResult<Option<Booking>>;
}

/// Repository trait for contact message access
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: &NewContact) -> CoreResult<Contact>;

    async fn list_contacts(&self) -> CoreResult<Vec<Contact>>;
}

/// Storage for admin sessions, keyed by session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> CoreResult<Option<AdminSession>>;

    async fn set(&self, session: AdminSession) -> CoreResult<()>;

    async fn delete(&self, id: &str) -> CoreResult<()>;
}

/// Checks a submitted admin password.
pub trait AdminCredential: Send + Sync {
    fn verify(&self, password: &str) -> bool;
}

/// Credential backed by a single configured secret.
#[derive(Clone)]
pub struct StaticAdminCredential {
    secret: String,
}

impl StaticAdminCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

impl AdminCredential for StaticAdminCredential {
    fn verify(&self, password: &str) -> bool {
        !self.secret.is_empty() && self.secret == password
    }
}
