use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::session::{Role, Session, SessionError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl LoginResponse {
    pub fn into_session(self) -> Result<Session, SessionError> {
        Session::from_raw(&self.token, &self.role, self.username, self.profile_image)
    }

    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub department_code: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub department_code: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: i64,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypePayload {
    #[serde(rename = "type")]
    pub leave_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EmployeeStatus::Active => EmployeeStatus::Inactive,
            EmployeeStatus::Inactive => EmployeeStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default, alias = "department")]
    pub department_name: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub gender: String,
    pub department_id: Option<i64>,
    pub city: String,
    pub country: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeStatusUpdate {
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    #[serde(rename = "Not Approved")]
    NotApproved,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::NotApproved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::NotApproved => "Not Approved",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
            LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
            LeaveStatus::NotApproved => "bg-status-error-bg text-status-error-text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    #[serde(alias = "leave_id")]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Pre-joined name sent by the dashboard feed.
    #[serde(default, rename = "employee_name")]
    pub joined_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub leave_type: String,
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
    #[serde(default)]
    pub posting_date: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub admin_remark: Option<String>,
}

impl LeaveApplication {
    pub fn employee_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if name.is_empty() {
            self.joined_name.clone().unwrap_or_default()
        } else {
            name
        }
    }
}

/// Date portion of an ISO timestamp such as `2025-01-10T00:00:00.000Z`.
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveDecision {
    pub status: LeaveStatus,
    pub admin_remark: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyLeaveRequest {
    pub leave_type_id: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_employees: u64,
    #[serde(default)]
    pub total_departments: u64,
    #[serde(default)]
    pub total_leave_types: u64,
    #[serde(default)]
    pub total_leave_applications: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default, rename = "latestLeaves")]
    pub latest_leaves: Vec<LeaveApplication>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Error body returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError {
            error: error.to_string(),
            code: "SESSION_ERROR".to_string(),
        }
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, &format!("HTTP_{}", status))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leave_status_uses_display_strings_on_the_wire() {
        let status: LeaveStatus = serde_json::from_value(json!("Not Approved")).unwrap();
        assert_eq!(status, LeaveStatus::NotApproved);
        assert_eq!(serde_json::to_value(LeaveStatus::Pending).unwrap(), json!("Pending"));
        assert!(serde_json::from_value::<LeaveStatus>(json!("Rejected")).is_err());
    }

    #[test]
    fn leave_application_accepts_leave_id_alias() {
        let leave: LeaveApplication = serde_json::from_value(json!({
            "leave_id": 12,
            "first_name": "Bob",
            "last_name": "Smith",
            "leave_type": "Sick",
            "from_date": "2025-01-10T00:00:00.000Z",
            "to_date": "2025-01-12T00:00:00.000Z",
            "posting_date": "2025-01-01T09:30:00.000Z",
            "status": "Pending"
        }))
        .unwrap();
        assert_eq!(leave.id, 12);
        assert_eq!(leave.employee_name(), "Bob Smith");
        assert_eq!(date_part(&leave.from_date), "2025-01-10");
        assert!(leave.admin_remark.is_none());
    }

    #[test]
    fn dashboard_rows_use_joined_employee_name() {
        let leave: LeaveApplication = serde_json::from_value(json!({
            "id": 4,
            "employee_name": "Carol King",
            "leave_type": "Casual",
            "from_date": "2025-01-10",
            "to_date": "2025-01-11",
            "posting_date": "2025-01-09T10:00:00.000Z",
            "status": "Approved"
        }))
        .unwrap();
        assert_eq!(leave.employee_name(), "Carol King");
    }

    #[test]
    fn change_password_serializes_camel_case_fields() {
        let body = serde_json::to_value(ChangePasswordRequest {
            old_password: "old".into(),
            new_password: "New1!a".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "oldPassword": "old", "newPassword": "New1!a" }));
    }

    #[test]
    fn leave_type_maps_type_field() {
        let parsed: LeaveType =
            serde_json::from_value(json!({ "id": 1, "type": "Casual", "description": "" }))
                .unwrap();
        assert_eq!(parsed.leave_type, "Casual");
        let payload = serde_json::to_value(LeaveTypePayload {
            leave_type: "Sick".into(),
            description: "Medical".into(),
        })
        .unwrap();
        assert_eq!(payload, json!({ "type": "Sick", "description": "Medical" }));
    }

    #[test]
    fn apply_leave_dates_serialize_as_plain_dates() {
        let body = serde_json::to_value(ApplyLeaveRequest {
            leave_type_id: 3,
            from_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            description: "trip".into(),
        })
        .unwrap();
        assert_eq!(body["from_date"], json!("2025-03-01"));
        assert_eq!(body["to_date"], json!("2025-03-02"));
    }

    #[test]
    fn login_response_converts_to_session() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "a.b.c",
            "role": "Employee",
            "username": "bob",
            "profile_image": ""
        }))
        .unwrap();
        assert_eq!(response.role(), Some(Role::Employee));
        let session = response.into_session().unwrap();
        assert_eq!(session.display_name(), "bob");
        assert!(session.avatar_ref().is_none());
    }

    #[test]
    fn login_response_with_unknown_role_is_rejected() {
        let response = LoginResponse {
            token: "a.b.c".into(),
            role: "Root".into(),
            username: None,
            profile_image: None,
        };
        assert!(response.into_session().is_err());
    }

    #[test]
    fn employee_status_toggles() {
        assert_eq!(EmployeeStatus::Active.toggled(), EmployeeStatus::Inactive);
        assert_eq!(EmployeeStatus::Inactive.toggled().as_str(), "Active");
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert!(ApiError::unauthorized("no").is_unauthorized());
        assert_eq!(ApiError::http(404, "missing").code, "HTTP_404");
        let raw: String = ApiError::unknown("boom").into();
        assert_eq!(raw, "boom");
    }
}
