use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{
        ApiError, ApplyLeaveRequest, DashboardResponse, LeaveApplication, LeaveDecision,
        LeaveStatus,
    },
};

pub(crate) fn leave_list_path(status: Option<LeaveStatus>) -> String {
    match status {
        None => "/leave-details".to_string(),
        Some(status) => format!("/leaves/{}", path_segment(status.as_str())),
    }
}

impl ApiClient {
    pub async fn admin_dashboard(&self) -> Result<DashboardResponse, ApiError> {
        self.get_json("/users/admin-dashboard", "Failed to load dashboard")
            .await
    }

    /// All applications, or only those in `status`.
    pub async fn list_leave_applications(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveApplication>, ApiError> {
        self.get_json(&leave_list_path(status), "Failed to load leave applications")
            .await
    }

    pub async fn decide_leave(&self, id: i64, decision: &LeaveDecision) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::PUT,
            &format!("/leaves/action/{}", id),
            Some(decision),
            "Failed to update",
        )
        .await
    }

    pub async fn apply_leave(&self, request: &ApplyLeaveRequest) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::POST,
            "/employee-leave/apply",
            Some(request),
            "Failed to apply for leave",
        )
        .await
    }

    pub async fn leave_history(&self) -> Result<Vec<LeaveApplication>, ApiError> {
        self.get_json("/employee-leave/history", "Failed to load leave history")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_list_path_encodes_status() {
        assert_eq!(leave_list_path(None), "/leave-details");
        assert_eq!(leave_list_path(Some(LeaveStatus::Pending)), "/leaves/Pending");
        assert_eq!(
            leave_list_path(Some(LeaveStatus::NotApproved)),
            "/leaves/Not%20Approved"
        );
    }
}
