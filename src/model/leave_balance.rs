use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row per (employee, leave type, year); unique across the triple.
/// Seeded by HR, decremented only inside the approval transaction.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1000,
        "leave_type": "annual",
        "year": 2026,
        "balance_days": 17
    })
)]
pub struct LeaveBalance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1000)]
    pub employee_id: u64,

    #[schema(example = "annual")]
    pub leave_type: String,

    #[schema(example = 2026)]
    pub year: i32,

    #[schema(example = 17)]
    pub balance_days: u32,
}
