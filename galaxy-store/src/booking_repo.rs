use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};
use galaxy_core::repository::BookingRepository;
use galaxy_core::{Booking, CoreError, CoreResult, NewBooking};

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i32,
    name: String,
    email: String,
    phone: String,
    service: String,
    date: String,
    time: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            service: row.service,
            date: row.date,
            time: row.time,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create_booking(
        &self,
        booking: &NewBooking,
        status: &str,
    ) -> CoreResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (name, email, phone, service, date, time, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, service, date, time, status, created_at
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.service)
        .bind(&booking.date)
        .bind(&booking.time)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(CoreError::storage)?;

        info!("Booking created: {}", row.id);
        Ok(row.into())
    }

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, name, email, phone, service, date, time, status, created_at FROM bookings",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CoreError::storage)?;

        debug!("Fetched {} bookings", rows.len());
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn update_booking_status(
        &self,
        id: i32,
        status: &str,
    ) -> CoreResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            UPDATE bookings SET status = $1
            WHERE id = $2
            RETURNING id, name, email, phone, service, date, time, status, created_at
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::storage)?;

        if row.is_some() {
            info!("Booking {} status set to {}", id, status);
        }
        Ok(row.map(Booking::from))
    }
}
