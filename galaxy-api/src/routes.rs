use axum::http::Method;

/// How route tokens are compared against the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Token may appear anywhere in the path, so `/x/api/bookingsXYZ`
    /// still counts as the bookings route.
    #[default]
    Substring,
    /// Token must line up with whole path segments.
    Segments,
}

/// Operation a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Preflight,
    CreateBooking,
    ListBookings,
    /// `None` when the segment after `bookings` is missing or has no
    /// leading integer.
    UpdateBookingStatus(Option<i32>),
    CreateContact,
    ListContacts,
    AdminLogin,
    AdminVerify,
    NotFound,
}

const BOOKINGS: &str = "api/bookings";
const CONTACTS: &str = "api/contacts";
const ADMIN_LOGIN: &str = "api/admin/login";
const ADMIN_VERIFY: &str = "api/admin/verify";
const STATUS: &str = "/status";

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteMatcher {
    mode: MatchMode,
}

impl RouteMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn resolve(&self, method: &Method, path: &str) -> Route {
        if *method == Method::OPTIONS {
            return Route::Preflight;
        }

        if self.contains(path, BOOKINGS) {
            match *method {
                Method::POST => return Route::CreateBooking,
                Method::GET => return Route::ListBookings,
                Method::PATCH if self.contains(path, STATUS) => {
                    return Route::UpdateBookingStatus(booking_id(path));
                }
                _ => {}
            }
        }

        if self.contains(path, CONTACTS) {
            match *method {
                Method::POST => return Route::CreateContact,
                Method::GET => return Route::ListContacts,
                _ => {}
            }
        }

        if *method == Method::POST {
            if self.contains(path, ADMIN_LOGIN) {
                return Route::AdminLogin;
            }
            if self.contains(path, ADMIN_VERIFY) {
                return Route::AdminVerify;
            }
        }

        Route::NotFound
    }

    fn contains(&self, path: &str, token: &str) -> bool {
        match self.mode {
            MatchMode::Substring => path.contains(token),
            MatchMode::Segments => {
                let wanted: Vec<&str> = token.split('/').filter(|s| !s.is_empty()).collect();
                let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
                segments.windows(wanted.len()).any(|window| window == wanted.as_slice())
            }
        }
    }
}

/// The segment right after the first literal `bookings` segment.
fn booking_id(path: &str) -> Option<i32> {
    let mut segments = path.split('/');
    segments.find(|segment| *segment == "bookings")?;
    leading_integer(segments.next()?)
}

/// Reads an optionally signed run of leading digits, ignoring whatever
/// follows, so `7abc` is booking 7.
fn leading_integer(segment: &str) -> Option<i32> {
    let trimmed = segment.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
