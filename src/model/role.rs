#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Admin = 1,
    Hr = 2,
    Manager = 3,
    Employee = 4,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Hr),
            3 => Some(Role::Manager),
            4 => Some(Role::Employee),
            _ => None,
        }
    }

    /// Roles allowed to transition leave requests
    pub fn can_approve(self) -> bool {
        matches!(self, Role::Admin | Role::Hr | Role::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_maps_known_roles() {
        assert_eq!(Role::from_id(1), Some(Role::Admin));
        assert_eq!(Role::from_id(2), Some(Role::Hr));
        assert_eq!(Role::from_id(3), Some(Role::Manager));
        assert_eq!(Role::from_id(4), Some(Role::Employee));
    }

    #[test]
    fn from_id_rejects_unknown_ids() {
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(5), None);
        assert_eq!(Role::from_id(255), None);
    }

    #[test]
    fn only_approver_roles_can_approve() {
        assert!(Role::Admin.can_approve());
        assert!(Role::Hr.can_approve());
        assert!(Role::Manager.can_approve());
        assert!(!Role::Employee.can_approve());
    }
}
