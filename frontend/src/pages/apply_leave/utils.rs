use chrono::NaiveDate;

use crate::api::ApplyLeaveRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveRequestForm {
    pub leave_type_id: String,
    pub from_date: String,
    pub to_date: String,
    pub description: String,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl LeaveRequestForm {
    pub fn validate(&self) -> Result<ApplyLeaveRequest, String> {
        const MISSING: &str = "Please fill all required fields.";
        let leave_type_id = self
            .leave_type_id
            .trim()
            .parse::<i64>()
            .map_err(|_| MISSING.to_string())?;
        let (Some(from_date), Some(to_date)) = (parse_date(&self.from_date), parse_date(&self.to_date))
        else {
            return Err(MISSING.into());
        };
        if from_date > to_date {
            return Err("From date cannot be after To date.".into());
        }
        Ok(ApplyLeaveRequest {
            leave_type_id,
            from_date,
            to_date,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(from: &str, to: &str) -> LeaveRequestForm {
        LeaveRequestForm {
            leave_type_id: "2".into(),
            from_date: from.into(),
            to_date: to.into(),
            description: " trip ".into(),
        }
    }

    #[test]
    fn valid_range_builds_request() {
        let request = form("2025-03-01", "2025-03-01").validate().unwrap();
        assert_eq!(request.leave_type_id, 2);
        assert_eq!(request.description, "trip");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["from_date"], "2025-03-01");
    }

    #[test]
    fn missing_fields_and_reversed_range_are_rejected() {
        assert_eq!(
            form("2025-03-05", "2025-03-01").validate().unwrap_err(),
            "From date cannot be after To date."
        );
        assert_eq!(
            form("", "2025-03-01").validate().unwrap_err(),
            "Please fill all required fields."
        );
        let mut no_type = form("2025-03-01", "2025-03-02");
        no_type.leave_type_id.clear();
        assert_eq!(no_type.validate().unwrap_err(), "Please fill all required fields.");
    }
}
