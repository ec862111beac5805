use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Tenant subdomain the login page was opened under.
    pub tenant: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub tenant: TenantInfo,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    pub id: String,
    pub name: String,
    pub subdomain: String,
}

/// Role of the signed-in user. Access checks go through `can_access` against
/// the typed `Module` enum; role-code strings never leak into the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
}

/// Navigable modules of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Module {
    Employees,
    Departments,
    LeaveApprovals,
    LeaveTypes,
    Holidays,
    Payslips,
    Goals,
    Reviews,
    Training,
    Skills,
    Assets,
    Documents,
}

impl Module {
    pub const ALL: [Module; 12] = [
        Module::Employees,
        Module::Departments,
        Module::LeaveApprovals,
        Module::LeaveTypes,
        Module::Holidays,
        Module::Payslips,
        Module::Goals,
        Module::Reviews,
        Module::Training,
        Module::Skills,
        Module::Assets,
        Module::Documents,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Module::Employees => "Employees",
            Module::Departments => "Departments",
            Module::LeaveApprovals => "Leave Approvals",
            Module::LeaveTypes => "Leave Types",
            Module::Holidays => "Holidays",
            Module::Payslips => "Payslips",
            Module::Goals => "Goals",
            Module::Reviews => "Reviews",
            Module::Training => "Training",
            Module::Skills => "Skills",
            Module::Assets => "Assets",
            Module::Documents => "Documents",
        }
    }
}

impl Role {
    /// Whether this role may open the given module. Admin and HR see
    /// everything; managers see the people-facing modules of their reports;
    /// employees see only their own self-service pages.
    pub fn can_access(&self, module: Module) -> bool {
        match self {
            Role::Admin | Role::Hr => true,
            Role::Manager => !matches!(module, Module::LeaveTypes | Module::Departments),
            Role::Employee => matches!(
                module,
                Module::Holidays
                    | Module::Payslips
                    | Module::Goals
                    | Module::Training
                    | Module::Skills
                    | Module::Documents
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_hr_access_everything() {
        for module in Module::ALL {
            assert!(Role::Admin.can_access(module));
            assert!(Role::Hr.can_access(module));
        }
    }

    #[test]
    fn employee_cannot_open_configuration_modules() {
        assert!(!Role::Employee.can_access(Module::LeaveTypes));
        assert!(!Role::Employee.can_access(Module::LeaveApprovals));
        assert!(!Role::Employee.can_access(Module::Employees));
        assert!(Role::Employee.can_access(Module::Payslips));
    }

    #[test]
    fn manager_sees_approvals_but_not_org_setup() {
        assert!(Role::Manager.can_access(Module::LeaveApprovals));
        assert!(!Role::Manager.can_access(Module::LeaveTypes));
        assert!(!Role::Manager.can_access(Module::Departments));
    }
}
