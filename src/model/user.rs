use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub role_id: u8,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: Option<u64>,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
