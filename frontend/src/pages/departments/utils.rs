use crate::{
    api::{Department, DepartmentPayload},
    utils::table::matches_query,
};

pub const PER_PAGE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentFormState {
    pub editing_id: Option<i64>,
    pub department_code: String,
    pub name: String,
    pub short_name: String,
}

impl DepartmentFormState {
    pub fn editing(department: &Department) -> Self {
        Self {
            editing_id: Some(department.id),
            department_code: department.department_code.clone(),
            name: department.name.clone(),
            short_name: department.short_name.clone(),
        }
    }

    pub fn validate(&self) -> Result<DepartmentPayload, String> {
        if self.department_code.trim().is_empty() {
            return Err("Department code is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Department name is required".into());
        }
        if self.short_name.trim().is_empty() {
            return Err("Short name is required".into());
        }
        Ok(DepartmentPayload {
            department_code: self.department_code.trim().to_string(),
            name: self.name.trim().to_string(),
            short_name: self.short_name.trim().to_string(),
        })
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Department"
        } else {
            "Add Department"
        }
    }

    pub fn success_message(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Department updated successfully"
        } else {
            "Department added successfully"
        }
    }
}

pub fn filter_departments(departments: &[Department], query: &str) -> Vec<Department> {
    departments
        .iter()
        .filter(|d| {
            matches_query(
                query,
                [
                    d.name.as_str(),
                    d.department_code.as_str(),
                    d.short_name.as_str(),
                ],
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64, code: &str, name: &str, short: &str) -> Department {
        Department {
            id,
            department_code: code.into(),
            name: name.into(),
            short_name: short.into(),
        }
    }

    #[test]
    fn search_covers_code_name_and_short_name() {
        let all = vec![
            dept(1, "ENG", "Engineering", "Eng"),
            dept(2, "HR", "Human Resources", "HR"),
        ];
        assert_eq!(filter_departments(&all, "human").len(), 1);
        assert_eq!(filter_departments(&all, "eng")[0].id, 1);
        assert_eq!(filter_departments(&all, "").len(), 2);
    }

    #[test]
    fn form_validation_and_mode() {
        let mut form = DepartmentFormState::default();
        assert_eq!(form.validate().unwrap_err(), "Department code is required");
        assert_eq!(form.title(), "Add Department");

        form = DepartmentFormState::editing(&dept(3, " OPS ", "Operations", "Ops"));
        let payload = form.validate().unwrap();
        assert_eq!(payload.department_code, "OPS");
        assert_eq!(form.success_message(), "Department updated successfully");
    }
}
