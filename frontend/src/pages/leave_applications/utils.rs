use crate::{
    api::{date_part, LeaveApplication, LeaveDecision, LeaveStatus},
    utils::table::{matches_query, sort_by_key, SortDirection, SortState},
};

pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[10, 25, 50, 100];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveSortKey {
    Employee,
    PostingDate,
}

impl LeaveSortKey {
    pub fn label(self) -> &'static str {
        match self {
            LeaveSortKey::Employee => "Employee",
            LeaveSortKey::PostingDate => "Posting Date",
        }
    }
}

pub fn default_sort() -> SortState<LeaveSortKey> {
    SortState::new(LeaveSortKey::PostingDate, SortDirection::Desc)
}

/// Applications whose employee name or leave type matches `query`, in `sort` order.
pub fn filter_and_sort(
    leaves: &[LeaveApplication],
    query: &str,
    sort: SortState<LeaveSortKey>,
) -> Vec<LeaveApplication> {
    let mut rows: Vec<LeaveApplication> = leaves
        .iter()
        .filter(|leave| {
            let name = leave.employee_name();
            matches_query(query, [name.as_str(), leave.leave_type.as_str()])
        })
        .cloned()
        .collect();
    match sort.key {
        LeaveSortKey::Employee => {
            sort_by_key(&mut rows, sort.direction, |leave| leave.first_name.to_lowercase())
        }
        LeaveSortKey::PostingDate => {
            sort_by_key(&mut rows, sort.direction, |leave| leave.posting_date.clone())
        }
    }
    rows
}

/// Only pending applications can still be decided.
pub fn can_decide(leave: &LeaveApplication) -> bool {
    leave.status == LeaveStatus::Pending
}

pub fn decision(status: LeaveStatus, remark: &str) -> LeaveDecision {
    LeaveDecision {
        status,
        admin_remark: remark.trim().to_string(),
    }
}

pub fn display_date(value: &str) -> String {
    date_part(value).to_string()
}
