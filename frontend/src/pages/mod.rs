pub mod apply_leave;
pub mod change_password;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod leave_applications;
pub mod leave_history;
pub mod leave_types;
pub mod login;
pub mod messages;
pub mod profile;
