use std::sync::Arc;
use galaxy_core::repository::{BookingRepository, ContactRepository};

use crate::admin::AdminSessions;
use crate::routes::RouteMatcher;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub sessions: Arc<AdminSessions>,
    pub routes: RouteMatcher,
}
