use crate::session::Session;

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".into());
    }
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

/// Which login heading is shown. Cosmetic only; the backend decides the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginAudience {
    #[default]
    Admin,
    Employee,
}

impl LoginAudience {
    pub const ALL: [LoginAudience; 2] = [LoginAudience::Admin, LoginAudience::Employee];

    pub fn heading(self) -> &'static str {
        match self {
            LoginAudience::Admin => "Admin Login",
            LoginAudience::Employee => "Employee Login",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            LoginAudience::Admin => "Admin",
            LoginAudience::Employee => "User",
        }
    }
}

/// Where a user who already holds a valid session should land.
pub fn landing_path(existing: Option<&Session>) -> Option<&'static str> {
    existing.map(|session| session.role().home_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::test_support::helpers::{session_for, FAR_FUTURE_EXP};

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            validate_credentials(" ", "x").unwrap_err(),
            "Username is required"
        );
        assert_eq!(
            validate_credentials("bob", "").unwrap_err(),
            "Password is required"
        );
        assert!(validate_credentials("bob", "secret").is_ok());
    }

    #[test]
    fn audience_labels() {
        assert_eq!(LoginAudience::default().heading(), "Admin Login");
        assert_eq!(LoginAudience::Employee.toggle_label(), "User");
    }

    #[test]
    fn existing_session_lands_on_role_home() {
        let admin = session_for(Role::Admin, "root", FAR_FUTURE_EXP);
        assert_eq!(landing_path(Some(&admin)), Some("/admin/dashboard"));
        let employee = session_for(Role::Employee, "bob", FAR_FUTURE_EXP);
        assert_eq!(landing_path(Some(&employee)), Some("/employee/my-profile"));
        assert_eq!(landing_path(None), None);
    }
}
