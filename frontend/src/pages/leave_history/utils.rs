use crate::{
    api::{LeaveApplication, LeaveStatus},
    utils::table::matches_query,
};

pub const PER_PAGE: usize = 5;

/// History rows in `status` (all when `None`) whose leave type or department matches `query`.
pub fn filter_history(
    leaves: &[LeaveApplication],
    status: Option<LeaveStatus>,
    query: &str,
) -> Vec<LeaveApplication> {
    leaves
        .iter()
        .filter(|leave| status.map_or(true, |s| leave.status == s))
        .filter(|leave| {
            matches_query(
                query,
                [
                    leave.leave_type.as_str(),
                    leave.department.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn department_label(leave: &LeaveApplication) -> String {
    leave
        .department
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(id: i64, leave_type: &str, department: Option<&str>, status: &str) -> LeaveApplication {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "leave_type": leave_type,
            "department": department,
            "posting_date": "2025-01-01T00:00:00.000Z",
            "status": status
        }))
        .unwrap()
    }

    fn sample() -> Vec<LeaveApplication> {
        vec![
            leave(1, "Sick", Some("Engineering"), "Pending"),
            leave(2, "Casual", Some("Finance"), "Approved"),
            leave(3, "Casual", None, "Pending"),
        ]
    }

    #[test]
    fn status_and_query_combine() {
        let ids = |rows: Vec<LeaveApplication>| rows.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_history(&sample(), None, "")), vec![1, 2, 3]);
        assert_eq!(ids(filter_history(&sample(), Some(LeaveStatus::Pending), "")), vec![1, 3]);
        assert_eq!(ids(filter_history(&sample(), Some(LeaveStatus::Pending), "casual")), vec![3]);
        assert_eq!(ids(filter_history(&sample(), None, "fin")), vec![2]);
    }

    #[test]
    fn missing_department_reads_na() {
        assert_eq!(department_label(&sample()[2]), "N/A");
        assert_eq!(department_label(&sample()[0]), "Engineering");
    }
}
