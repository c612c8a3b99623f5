#![cfg(not(coverage))]

use super::*;
use crate::session::{
    logout, LogoutNotifier, MemorySessionStore, Role, SessionStore, PROFILE_IMAGE_KEY,
};
use crate::test_support::helpers::{session_for, FAR_FUTURE_EXP};
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};

fn logged_in(role: Role) -> Rc<MemorySessionStore> {
    let store = Rc::new(MemorySessionStore::in_memory());
    store
        .write(&session_for(role, "alice", FAR_FUTURE_EXP))
        .unwrap();
    store
}

fn api_client(server: &MockServer, store: Rc<MemorySessionStore>) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url(), store)
}

fn bearer(store: &MemorySessionStore) -> String {
    format!("Bearer {}", store.read().unwrap().token())
}

fn leave_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": "Bob",
        "last_name": "Smith",
        "department": "Engineering",
        "leave_type": "Sick",
        "from_date": "2025-01-10T00:00:00.000Z",
        "to_date": "2025-01-12T00:00:00.000Z",
        "posting_date": "2025-01-02T08:00:00.000Z",
        "status": status,
        "admin_remark": null
    })
}

#[tokio::test]
async fn login_and_store_persists_session() {
    let server = MockServer::start_async().await;
    let token = crate::test_support::helpers::mint_token("Employee", FAR_FUTURE_EXP);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/login")
                .json_body(json!({ "username": "bob", "password": "secret" }));
            then.status(200).json_body(json!({
                "token": token,
                "role": "Employee",
                "username": "bob",
                "profile_image": "https://img.example/bob.png"
            }));
        })
        .await;

    let store = Rc::new(MemorySessionStore::in_memory());
    let client = api_client(&server, store.clone());
    let session = client
        .login_and_store(&LoginRequest {
            username: "bob".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(session.role(), Role::Employee);
    assert_eq!(store.read(), Some(session));
}

#[tokio::test]
async fn rejected_login_reports_backend_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let store = Rc::new(MemorySessionStore::in_memory());
    let client = api_client(&server, store.clone());
    let err = client
        .login_and_store(&LoginRequest {
            username: "bob".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Invalid credentials");
    assert!(store.read().is_none());
}

#[tokio::test]
async fn login_with_unknown_role_is_not_stored() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/login");
            then.status(200)
                .json_body(json!({ "token": "a.b.c", "role": "Manager", "username": "m" }));
        })
        .await;

    let store = Rc::new(MemorySessionStore::in_memory());
    let client = api_client(&server, store.clone());
    let err = client
        .login_and_store(&LoginRequest {
            username: "m".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, "SESSION_ERROR");
    assert!(store.backend().is_empty());
}

#[tokio::test]
async fn resource_calls_attach_stored_token() {
    let server = MockServer::start_async().await;
    let store = logged_in(Role::Admin);
    let auth = bearer(&store);

    let departments = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/departments")
                .header("authorization", auth.as_str());
            then.status(200).json_body(json!([
                { "id": 1, "department_code": "ENG", "name": "Engineering", "short_name": "Eng" }
            ]));
        })
        .await;
    let created = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/departments")
                .header("authorization", auth.as_str())
                .json_body(json!({ "department_code": "HR", "name": "Human Resources", "short_name": "HR" }));
            then.status(201)
                .json_body(json!({ "message": "Department added" }));
        })
        .await;

    let client = api_client(&server, store);
    let list = client.list_departments().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].department_code, "ENG");

    let message = client
        .create_department(&DepartmentPayload {
            department_code: "HR".into(),
            name: "Human Resources".into(),
            short_name: "HR".into(),
        })
        .await
        .unwrap();
    assert_eq!(message, "Department added");

    departments.assert_async().await;
    created.assert_async().await;
}

#[tokio::test]
async fn calls_without_session_fail_before_sending() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/leave-types");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = api_client(&server, Rc::new(MemorySessionStore::in_memory()));
    let err = client.list_leave_types().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn unauthorized_response_leaves_session_alone() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employees");
            then.status(401).json_body(json!({ "message": "Token expired" }));
        })
        .await;

    let store = logged_in(Role::Admin);
    let client = api_client(&server, store.clone());
    let err = client.list_employees().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.error, "Token expired");
    assert_eq!(store.read().map(|s| s.role()), Some(Role::Admin));
}

#[tokio::test]
async fn wrong_old_password_keeps_user_logged_in() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/users/change-password");
            then.status(401)
                .json_body(json!({ "message": "Old password is incorrect" }));
        })
        .await;

    let store = logged_in(Role::Employee);
    let before = store.read();
    let client = api_client(&server, store.clone());
    let err = client
        .change_password(&ChangePasswordRequest {
            old_password: "wrong".into(),
            new_password: "Secret1!".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "Old password is incorrect");
    assert_eq!(store.read(), before);
}

#[tokio::test]
async fn failed_delete_uses_fallback_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/departments/4");
            then.status(500).body("");
        })
        .await;

    let client = api_client(&server, logged_in(Role::Admin));
    let err = client.delete_department(4).await.unwrap_err();
    assert_eq!(err.code, "HTTP_500");
    assert!(err.error.contains("assigned to one or more employees"));
}

#[tokio::test]
async fn leave_applications_filter_by_encoded_status() {
    let server = MockServer::start_async().await;
    let filtered = server
        .mock_async(|when, then| {
            when.method(GET).path("/leaves/Not%20Approved");
            then.status(200)
                .json_body(json!([leave_json(3, "Not Approved")]));
        })
        .await;
    let all = server
        .mock_async(|when, then| {
            when.method(GET).path("/leave-details");
            then.status(200)
                .json_body(json!([leave_json(1, "Pending"), leave_json(3, "Not Approved")]));
        })
        .await;
    let decided = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/leaves/action/1")
                .json_body(json!({ "status": "Approved", "admin_remark": "enjoy" }));
            then.status(200)
                .json_body(json!({ "message": "Leave status updated" }));
        })
        .await;

    let client = api_client(&server, logged_in(Role::Admin));
    let rejected = client
        .list_leave_applications(Some(LeaveStatus::NotApproved))
        .await
        .unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].status, LeaveStatus::NotApproved);

    let everything = client.list_leave_applications(None).await.unwrap();
    assert_eq!(everything.len(), 2);

    client
        .decide_leave(
            1,
            &LeaveDecision {
                status: LeaveStatus::Approved,
                admin_remark: "enjoy".into(),
            },
        )
        .await
        .unwrap();

    filtered.assert_async().await;
    all.assert_async().await;
    decided.assert_async().await;
}

#[tokio::test]
async fn employee_endpoints_round_trip() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/employee-leave/history");
            then.status(200).json_body(json!([leave_json(9, "Approved")]));
        })
        .await;
    let applied = server
        .mock_async(|when, then| {
            when.method(POST).path("/employee-leave/apply").json_body(json!({
                "leave_type_id": 2,
                "from_date": "2025-02-03",
                "to_date": "2025-02-04",
                "description": "family"
            }));
            then.status(201)
                .json_body(json!({ "message": "Leave applied successfully" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/employees/status/5")
                .json_body(json!({ "status": "Inactive" }));
            then.status(200).json_body(json!({ "message": "Status updated" }));
        })
        .await;

    let client = api_client(&server, logged_in(Role::Employee));
    let history = client.leave_history().await.unwrap();
    assert_eq!(history[0].id, 9);

    let message = client
        .apply_leave(&ApplyLeaveRequest {
            leave_type_id: 2,
            from_date: chrono::NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            to_date: chrono::NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
            description: "family".into(),
        })
        .await
        .unwrap();
    assert_eq!(message, "Leave applied successfully");
    applied.assert_async().await;

    let message = client
        .set_employee_status(5, EmployeeStatus::Inactive)
        .await
        .unwrap();
    assert_eq!(message, "Status updated");
}

#[tokio::test]
async fn dashboard_parses_stats_and_latest_leaves() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/admin-dashboard");
            then.status(200).json_body(json!({
                "stats": {
                    "total_employees": 12,
                    "total_departments": 3,
                    "total_leave_types": 4,
                    "total_leave_applications": 20
                },
                "latestLeaves": [leave_json(1, "Pending")]
            }));
        })
        .await;

    let client = api_client(&server, logged_in(Role::Admin));
    let dashboard = client.admin_dashboard().await.unwrap();
    assert_eq!(dashboard.stats.total_employees, 12);
    assert_eq!(dashboard.latest_leaves.len(), 1);
}

#[tokio::test]
async fn profile_update_does_not_touch_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/employee-profile/profile");
            then.status(200).json_body(json!({
                "message": "Profile updated successfully",
                "profile_image": "https://img.example/new.png"
            }));
        })
        .await;

    let store = logged_in(Role::Employee);
    let client = api_client(&server, store.clone());
    let profile = Profile {
        username: "alice".into(),
        first_name: "Alice".into(),
        ..Default::default()
    };
    let response = client
        .update_profile(
            &profile,
            Some(ProfileImage {
                file_name: "me.png".into(),
                mime_type: "image/png".into(),
                bytes: vec![137, 80, 78, 71],
            }),
        )
        .await
        .unwrap();

    assert_eq!(response.message, "Profile updated successfully");
    assert_eq!(
        response.profile_image.as_deref(),
        Some("https://img.example/new.png")
    );
    assert_eq!(
        store.backend().raw(PROFILE_IMAGE_KEY).as_deref(),
        Some("")
    );
}

#[tokio::test]
async fn change_password_returns_backend_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/users/change-password")
                .json_body(json!({ "oldPassword": "old", "newPassword": "Newpass1!" }));
            then.status(400)
                .json_body(json!({ "message": "Old password is incorrect" }));
        })
        .await;

    let client = api_client(&server, logged_in(Role::Employee));
    let err = client
        .change_password(&ChangePasswordRequest {
            old_password: "old".into(),
            new_password: "Newpass1!".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Old password is incorrect");
    assert_eq!(err.code, "HTTP_400");
}

#[tokio::test]
async fn logout_notifies_backend_with_bearer_token() {
    let server = MockServer::start_async().await;
    let store = logged_in(Role::Admin);
    let auth = bearer(&store);
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/logout")
                .header("authorization", auth.as_str());
            then.status(200).json_body(json!({ "message": "Logged out" }));
        })
        .await;

    let client = api_client(&server, store.clone());
    let target = RefCell::new(None::<String>);
    logout(store.as_ref(), &client, futures::future::pending::<()>(), |path| {
        *target.borrow_mut() = Some(path.to_string())
    })
    .await;

    mock.assert_async().await;
    assert!(store.read().is_none());
    assert_eq!(target.into_inner().as_deref(), Some("/login"));
}

#[tokio::test]
async fn logout_survives_unreachable_backend() {
    // Nothing listens on the discard port, so the notification fails.
    let store = logged_in(Role::Employee);
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9", store.clone());
    assert!(client.notify_logout("token").await.is_err());

    let target = RefCell::new(None::<String>);
    logout(store.as_ref(), &client, futures::future::pending::<()>(), |path| {
        *target.borrow_mut() = Some(path.to_string())
    })
    .await;

    assert!(store.read().is_none());
    assert_eq!(target.into_inner().as_deref(), Some("/login"));
}

#[tokio::test]
async fn logout_gives_up_on_slow_backend() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/logout");
            then.status(200)
                .delay(std::time::Duration::from_secs(30))
                .json_body(json!({ "message": "Logged out" }));
        })
        .await;

    let store = logged_in(Role::Admin);
    let client = api_client(&server, store.clone());
    let target = RefCell::new(None::<String>);
    logout(
        store.as_ref(),
        &client,
        tokio::time::sleep(std::time::Duration::from_millis(50)),
        |path| *target.borrow_mut() = Some(path.to_string()),
    )
    .await;

    assert!(store.read().is_none());
    assert_eq!(target.into_inner().as_deref(), Some("/login"));
}
