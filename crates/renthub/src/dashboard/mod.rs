//! Tenant dashboard model: the signed lease summary plus the maintenance,
//! payment, and notification feeds rendered across the dashboard tabs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bottom-bar tabs of the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    Home,
    Payments,
    Maintenance,
    Profile,
}

impl DashboardTab {
    pub const fn ordered() -> [Self; 4] {
        [Self::Home, Self::Payments, Self::Maintenance, Self::Profile]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Payments => "Payments",
            Self::Maintenance => "Maintenance",
            Self::Profile => "Profile",
        }
    }
}

/// Lifecycle of a maintenance ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Submitted,
    Scheduled,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

/// Settlement state of a rent charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Due,
    Late,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Late => "Late",
        }
    }
}

/// The tenant's current lease at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancySummary {
    pub address: String,
    /// Monthly rent in whole currency units.
    pub monthly_rent: u32,
    pub next_due: NaiveDate,
    pub lease_end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: u32,
    pub title: String,
    pub status: MaintenanceStatus,
    pub opened_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentPayment {
    pub id: u32,
    pub amount: u32,
    pub paid_on: NaiveDate,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub posted: String,
}

/// The rent charge coming due next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingPayment {
    pub amount: u32,
    pub due_on: NaiveDate,
}

/// Aggregated dashboard state for one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantDashboard {
    pub tenancy: TenancySummary,
    pub maintenance: Vec<MaintenanceRequest>,
    pub payments: Vec<RentPayment>,
    pub notifications: Vec<Notification>,
}

impl TenantDashboard {
    /// Built-in demo tenancy used when no backing account is wired up.
    pub fn seed() -> Self {
        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
        }

        Self {
            tenancy: TenancySummary {
                address: "123 Smart Home Ave, San Francisco, CA 94105".to_string(),
                monthly_rent: 2500,
                next_due: date(2023, 6, 1),
                lease_end: date(2024, 5, 31),
            },
            maintenance: vec![
                MaintenanceRequest {
                    id: 1,
                    title: "Leaking Faucet".to_string(),
                    status: MaintenanceStatus::InProgress,
                    opened_on: date(2023, 5, 15),
                },
                MaintenanceRequest {
                    id: 2,
                    title: "AC Repair".to_string(),
                    status: MaintenanceStatus::Scheduled,
                    opened_on: date(2023, 5, 20),
                },
            ],
            payments: vec![
                RentPayment {
                    id: 1,
                    amount: 2500,
                    paid_on: date(2023, 5, 1),
                    status: PaymentStatus::Paid,
                },
                RentPayment {
                    id: 2,
                    amount: 2500,
                    paid_on: date(2023, 4, 1),
                    status: PaymentStatus::Paid,
                },
                RentPayment {
                    id: 3,
                    amount: 2500,
                    paid_on: date(2023, 3, 1),
                    status: PaymentStatus::Paid,
                },
            ],
            notifications: vec![
                Notification {
                    message: "Your maintenance request has been updated".to_string(),
                    posted: "2 hours ago".to_string(),
                },
                Notification {
                    message: "Rent payment reminder: Due in 5 days".to_string(),
                    posted: "1 day ago".to_string(),
                },
                Notification {
                    message: "New community announcement".to_string(),
                    posted: "3 days ago".to_string(),
                },
            ],
        }
    }

    /// Tickets still being worked, oldest first.
    pub fn open_requests(&self) -> Vec<&MaintenanceRequest> {
        let mut open: Vec<&MaintenanceRequest> = self
            .maintenance
            .iter()
            .filter(|request| request.status.is_open())
            .collect();
        open.sort_by_key(|request| request.opened_on);
        open
    }

    /// Settled and pending charges, newest first.
    pub fn payment_history(&self) -> Vec<&RentPayment> {
        let mut history: Vec<&RentPayment> = self.payments.iter().collect();
        history.sort_by(|a, b| b.paid_on.cmp(&a.paid_on));
        history
    }

    pub fn next_payment(&self) -> UpcomingPayment {
        UpcomingPayment {
            amount: self.tenancy.monthly_rent,
            due_on: self.tenancy.next_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requests_exclude_resolved_tickets() {
        let mut dashboard = TenantDashboard::seed();
        dashboard.maintenance[0].status = MaintenanceStatus::Resolved;
        let open = dashboard.open_requests();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "AC Repair");
    }

    #[test]
    fn payment_history_is_newest_first() {
        let dashboard = TenantDashboard::seed();
        let history = dashboard.payment_history();
        let dates: Vec<_> = history.iter().map(|payment| payment.paid_on).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn next_payment_reflects_the_lease_terms() {
        let dashboard = TenantDashboard::seed();
        let upcoming = dashboard.next_payment();
        assert_eq!(upcoming.amount, dashboard.tenancy.monthly_rent);
        assert_eq!(upcoming.due_on, dashboard.tenancy.next_due);
    }

    #[test]
    fn tab_bar_order_is_stable() {
        let labels: Vec<_> = DashboardTab::ordered()
            .iter()
            .map(|tab| tab.label())
            .collect();
        assert_eq!(labels, vec!["Home", "Payments", "Maintenance", "Profile"]);
    }
}
