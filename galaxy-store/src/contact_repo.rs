use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use galaxy_core::repository::ContactRepository;
use galaxy_core::{Contact, CoreError, CoreResult, NewContact};

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i32,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create_contact(&self, contact: &NewContact) -> CoreResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await
        .map_err(CoreError::storage)?;

        info!("Contact message stored: {}", row.id);
        Ok(row.into())
    }

    async fn list_contacts(&self) -> CoreResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, message, created_at FROM contacts",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CoreError::storage)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }
}
