use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LeaveType, LeaveTypePayload},
};

impl ApiClient {
    pub async fn list_leave_types(&self) -> Result<Vec<LeaveType>, ApiError> {
        self.get_json("/leave-types", "Failed to load leave types")
            .await
    }

    pub async fn create_leave_type(&self, payload: &LeaveTypePayload) -> Result<String, ApiError> {
        self.send_json_for_message(Method::POST, "/leave-types", Some(payload), "Error occurred")
            .await
    }

    pub async fn update_leave_type(
        &self,
        id: i64,
        payload: &LeaveTypePayload,
    ) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::PUT,
            &format!("/leave-types/{}", id),
            Some(payload),
            "Error occurred",
        )
        .await
    }

    pub async fn delete_leave_type(&self, id: i64) -> Result<String, ApiError> {
        self.send_json_for_message::<()>(
            Method::DELETE,
            &format!("/leave-types/{}", id),
            None,
            "Cannot delete leave type. It is used in one or more leave records",
        )
        .await
    }
}
