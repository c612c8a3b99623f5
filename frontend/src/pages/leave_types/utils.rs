use crate::{
    api::{LeaveType, LeaveTypePayload},
    utils::table::matches_query,
};

pub const PER_PAGE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveTypeFormState {
    pub editing_id: Option<i64>,
    pub leave_type: String,
    pub description: String,
}

impl LeaveTypeFormState {
    pub fn editing(leave_type: &LeaveType) -> Self {
        Self {
            editing_id: Some(leave_type.id),
            leave_type: leave_type.leave_type.clone(),
            description: leave_type.description.clone(),
        }
    }

    /// Only the type name is mandatory.
    pub fn validate(&self) -> Result<LeaveTypePayload, String> {
        let name = self.leave_type.trim();
        if name.is_empty() {
            return Err("Leave type is required".into());
        }
        Ok(LeaveTypePayload {
            leave_type: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit Leave Type"
        } else {
            "Add Leave Type"
        }
    }

    pub fn success_message(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Leave type updated"
        } else {
            "Leave type added"
        }
    }
}

pub fn filter_leave_types(types: &[LeaveType], query: &str) -> Vec<LeaveType> {
    types
        .iter()
        .filter(|t| matches_query(query, [t.leave_type.as_str(), t.description.as_str()]))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave_type(id: i64, name: &str, description: &str) -> LeaveType {
        LeaveType {
            id,
            leave_type: name.into(),
            description: description.into(),
        }
    }

    #[test]
    fn search_matches_type_or_description() {
        let all = vec![
            leave_type(1, "Sick", "Medical leave"),
            leave_type(2, "Casual", "Personal errands"),
        ];
        assert_eq!(filter_leave_types(&all, "MEDICAL")[0].id, 1);
        assert_eq!(filter_leave_types(&all, "casual")[0].id, 2);
        assert!(filter_leave_types(&all, "maternity").is_empty());
    }

    #[test]
    fn description_is_optional() {
        let form = LeaveTypeFormState {
            leave_type: " Earned ".into(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.leave_type, "Earned");
        assert!(payload.description.is_empty());
        assert!(LeaveTypeFormState::default().validate().is_err());
        let editing = LeaveTypeFormState::editing(&leave_type(5, "Sick", ""));
        assert_eq!(editing.title(), "Edit Leave Type");
        assert_eq!(editing.success_message(), "Leave type updated");
    }
}
