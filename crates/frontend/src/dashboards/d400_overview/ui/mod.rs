mod dashboard;

pub use dashboard::{department_totals, OverviewDashboard, OVERVIEW_TAB_KEY};
