use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Department, DepartmentPayload},
};

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json("/departments", "Failed to load departments")
            .await
    }

    pub async fn create_department(&self, payload: &DepartmentPayload) -> Result<String, ApiError> {
        self.send_json_for_message(Method::POST, "/departments", Some(payload), "Operation failed")
            .await
    }

    pub async fn update_department(
        &self,
        id: i64,
        payload: &DepartmentPayload,
    ) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::PUT,
            &format!("/departments/{}", id),
            Some(payload),
            "Operation failed",
        )
        .await
    }

    pub async fn delete_department(&self, id: i64) -> Result<String, ApiError> {
        self.send_json_for_message::<()>(
            Method::DELETE,
            &format!("/departments/{}", id),
            None,
            "Cannot delete department. It is assigned to one or more employees",
        )
        .await
    }
}
