use crate::api::leave_balance::{BalanceFilter, UpsertBalance};
use crate::model::leave_balance::LeaveBalance;
use crate::api::leave_request::{CreateLeave, LeaveFilter, LeaveListResponse, LeaveResponse};
use crate::model::leave_request::{LeaveStatus, LeaveType};
use crate::models::{ValidateResponse, ValidatedUser};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Service API",
        version = "1.0.0",
        description = r#"
## Leave Service

Leave request lifecycle and leave balances for the HR platform.

### 🔹 Key Features
- **Leave Requests**
  - Apply, edit/resubmit, cancel; approve or reject as Admin/HR/Manager
- **Leave Balances**
  - Seed yearly balances per employee and leave type, view remaining days

### 🔐 Security
All endpoints require a **JWT Bearer token**. Tokens are not verified here:
every request is resolved through the auth service's validate endpoint.

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::update_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::cancel_leave,

        crate::api::leave_balance::upsert_balance,
        crate::api::leave_balance::list_balances
    ),
    components(
        schemas(
            LeaveType,
            LeaveStatus,
            CreateLeave,
            LeaveFilter,
            LeaveResponse,
            LeaveListResponse,
            UpsertBalance,
            BalanceFilter,
            LeaveBalance,
            ValidatedUser,
            ValidateResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Leave", description = "Leave request lifecycle APIs"),
        (name = "Leave balance", description = "Leave balance seeding and lookup APIs"),
    )
)]
pub struct ApiDoc;
