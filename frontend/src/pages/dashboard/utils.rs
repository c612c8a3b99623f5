use crate::api::DashboardStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: u64,
    pub route: &'static str,
}

pub fn summary_cards(stats: &DashboardStats) -> [SummaryCard; 4] {
    [
        SummaryCard {
            label: "Total Leave Applications",
            value: stats.total_leave_applications,
            route: "/admin/leave-applications",
        },
        SummaryCard {
            label: "Registered Employees",
            value: stats.total_employees,
            route: "/admin/employees",
        },
        SummaryCard {
            label: "Total Departments",
            value: stats.total_departments,
            route: "/admin/departments",
        },
        SummaryCard {
            label: "Leave Types",
            value: stats.total_leave_types,
            route: "/admin/leave-types",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_link_into_admin_area() {
        let stats = DashboardStats {
            total_employees: 12,
            total_departments: 3,
            total_leave_types: 4,
            total_leave_applications: 20,
        };
        let cards = summary_cards(&stats);
        assert_eq!(cards[0].value, 20);
        assert_eq!(cards[1].label, "Registered Employees");
        assert!(cards.iter().all(|card| card.route.starts_with("/admin/")));
    }
}
