use crate::api::ChangePasswordRequest;

const SPECIAL_CHARS: &str = "@$!%*?&#";
const MIN_LENGTH: usize = 6;

/// Strength rules applied to the new password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordPolicy {
    /// Presence and confirmation only.
    #[default]
    Basic,
    /// Also requires length, mixed case, a digit and a special character.
    Strict,
}

impl PasswordPolicy {
    pub fn check(self, password: &str) -> Result<(), &'static str> {
        if self == PasswordPolicy::Basic {
            return Ok(());
        }
        if password.chars().count() < MIN_LENGTH {
            return Err("Password must be at least 6 characters");
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err("Must contain at least one lowercase letter");
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err("Must contain at least one uppercase letter");
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err("Must contain at least one number");
        }
        if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            return Err("Must contain at least one special character");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self, policy: PasswordPolicy) -> Result<ChangePasswordRequest, String> {
        if self.old_password.is_empty() {
            return Err("Old password is required".into());
        }
        if self.new_password.is_empty() {
            return Err("New password is required".into());
        }
        policy.check(&self.new_password).map_err(str::to_string)?;
        if self.confirm_password != self.new_password {
            return Err("Passwords do not match".into());
        }
        Ok(ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(new: &str, confirm: &str) -> PasswordForm {
        PasswordForm {
            old_password: "old".into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn basic_policy_only_checks_presence_and_match() {
        let request = form("abc", "abc").validate(PasswordPolicy::Basic).unwrap();
        assert_eq!(request.new_password, "abc");
        assert_eq!(
            form("abc", "abd").validate(PasswordPolicy::Basic).unwrap_err(),
            "Passwords do not match"
        );
        let mut empty = form("abc", "abc");
        empty.old_password.clear();
        assert_eq!(
            empty.validate(PasswordPolicy::Basic).unwrap_err(),
            "Old password is required"
        );
    }

    #[test]
    fn strict_policy_reports_first_missing_rule() {
        let strict = PasswordPolicy::Strict;
        assert_eq!(strict.check("Ab1!"), Err("Password must be at least 6 characters"));
        assert_eq!(strict.check("ABCDEF1!"), Err("Must contain at least one lowercase letter"));
        assert_eq!(strict.check("abcdef1!"), Err("Must contain at least one uppercase letter"));
        assert_eq!(strict.check("Abcdefg!"), Err("Must contain at least one number"));
        assert_eq!(strict.check("Abcdef12"), Err("Must contain at least one special character"));
        assert_eq!(strict.check("Abcde1#"), Ok(()));
    }

    #[test]
    fn strict_policy_runs_before_confirmation() {
        assert_eq!(
            form("weak", "other").validate(PasswordPolicy::Strict).unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert!(form("Str0ng@", "Str0ng@").validate(PasswordPolicy::Strict).is_ok());
    }
}
