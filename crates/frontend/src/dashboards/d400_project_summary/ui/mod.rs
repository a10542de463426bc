mod dashboard;

pub use dashboard::{DashboardTab, ProjectsDashboard};
