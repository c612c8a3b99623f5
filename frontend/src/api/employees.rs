use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Employee, EmployeePayload, EmployeeStatus, EmployeeStatusUpdate},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees", "Failed to load employees").await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::POST,
            "/employees",
            Some(payload),
            "Failed to save employee",
        )
        .await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::PUT,
            &format!("/employees/{}", id),
            Some(payload),
            "Failed to save employee",
        )
        .await
    }

    pub async fn set_employee_status(
        &self,
        id: i64,
        status: EmployeeStatus,
    ) -> Result<String, ApiError> {
        self.send_json_for_message(
            Method::PATCH,
            &format!("/employees/status/{}", id),
            Some(&EmployeeStatusUpdate { status }),
            "Failed to update status",
        )
        .await
    }
}
