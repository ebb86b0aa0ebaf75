use crate::model::role::Role;
use crate::models::ValidatedUser;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// Authenticated caller identity. Populated into request extensions by the
/// service's auth middleware: the auth service decodes the JWT itself, every
/// other service resolves the token through the auth service validate endpoint.
#[derive(Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub email: String,
    pub role: Role,

    /// Present only if this user is linked to an employee record
    pub employee_id: Option<u64>,
}

impl AuthUser {
    pub fn from_validated(user: ValidatedUser) -> Option<Self> {
        let role = Role::from_id(user.role_id)?;
        Some(AuthUser {
            user_id: user.id,
            email: user.email,
            role,
            employee_id: user.employee_id,
        })
    }

    pub fn require_admin(&self) -> actix_web::Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Admin only"))
        }
    }

    pub fn require_approver(&self) -> actix_web::Result<()> {
        if self.role.can_approve() {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Admin/HR/Manager only"))
        }
    }

    /// Returns true if the user is an employee
    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ErrorUnauthorized("Missing authentication context"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> AuthUser {
        AuthUser {
            user_id: 1,
            email: "someone@company.com".into(),
            role,
            employee_id: Some(1000),
        }
    }

    #[test]
    fn admin_guard_rejects_everyone_else() {
        assert!(user_with_role(Role::Admin).require_admin().is_ok());
        assert!(user_with_role(Role::Hr).require_admin().is_err());
        assert!(user_with_role(Role::Manager).require_admin().is_err());
        assert!(user_with_role(Role::Employee).require_admin().is_err());
    }

    #[test]
    fn approver_guard_allows_admin_hr_manager() {
        assert!(user_with_role(Role::Admin).require_approver().is_ok());
        assert!(user_with_role(Role::Hr).require_approver().is_ok());
        assert!(user_with_role(Role::Manager).require_approver().is_ok());
        assert!(user_with_role(Role::Employee).require_approver().is_err());
    }

    #[test]
    fn from_validated_rejects_unknown_role() {
        let bad = ValidatedUser {
            id: 1,
            email: "x@y.z".into(),
            first_name: "X".into(),
            last_name: "Y".into(),
            role_id: 99,
            employee_id: None,
        };
        assert!(AuthUser::from_validated(bad).is_none());
    }

    #[test]
    fn from_validated_keeps_employee_link() {
        let ok = ValidatedUser {
            id: 5,
            email: "emp@company.com".into(),
            first_name: "Em".into(),
            last_name: "Ployee".into(),
            role_id: 4,
            employee_id: Some(42),
        };
        let user = AuthUser::from_validated(ok).unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.employee_id, Some(42));
    }
}
