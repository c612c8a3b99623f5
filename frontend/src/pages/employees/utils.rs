use chrono::NaiveDate;

use crate::{
    api::{date_part, Employee, EmployeePayload, EmployeeStatus},
    utils::table::matches_query,
};

pub const PER_PAGE: usize = 5;
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub editing_id: Option<i64>,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub department_id: String,
    pub city: String,
    pub country: String,
    pub mobile_number: String,
    pub birth_date: String,
    pub address: String,
}

impl EmployeeFormState {
    pub fn editing(employee: &Employee) -> Self {
        Self {
            editing_id: Some(employee.id),
            employee_code: employee.employee_code.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            password: String::new(),
            gender: employee.gender.clone(),
            department_id: employee
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            city: employee.city.clone(),
            country: employee.country.clone(),
            mobile_number: employee.mobile_number.clone(),
            birth_date: employee
                .birth_date
                .as_deref()
                .map(|value| date_part(value).to_string())
                .unwrap_or_default(),
            address: employee.address.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<EmployeePayload, String> {
        let required = [
            (&self.employee_code, "Employee code"),
            (&self.first_name, "First name"),
            (&self.email, "Email"),
            (&self.gender, "Gender"),
            (&self.mobile_number, "Mobile number"),
        ];
        if let Some((_, label)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(format!("{} is required", label));
        }
        if !self.email.contains('@') {
            return Err("Email is invalid".into());
        }
        if !self.is_editing() && self.password.is_empty() {
            return Err("Password is required".into());
        }
        let department_id = self
            .department_id
            .trim()
            .parse::<i64>()
            .map_err(|_| "Department is required".to_string())?;
        let birth_date = match self.birth_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| "Birth date is invalid".to_string())?,
            ),
        };

        Ok(EmployeePayload {
            employee_code: self.employee_code.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            gender: self.gender.clone(),
            department_id: Some(department_id),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            birth_date,
            address: self.address.trim().to_string(),
        })
    }
}

pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| {
            let name = e.full_name();
            matches_query(
                query,
                [name.as_str(), e.email.as_str(), e.mobile_number.as_str()],
            )
        })
        .cloned()
        .collect()
}

pub fn status_prompt(status: EmployeeStatus) -> String {
    let verb = match status.toggled() {
        EmployeeStatus::Active => "activate",
        EmployeeStatus::Inactive => "deactivate",
    };
    format!("Are you sure you want to {} this employee?", verb)
}

pub fn status_badge_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Active => "bg-status-success-bg text-status-success-text",
        EmployeeStatus::Inactive => "bg-status-error-bg text-status-error-text",
    }
}
