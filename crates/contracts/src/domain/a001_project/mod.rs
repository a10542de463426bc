pub mod aggregate;
pub mod query;
pub mod status_report;

pub use aggregate::{parse_date, parse_project_list, FieldRoles, Project, ProjectField};
pub use query::{filter_options, FilterParams, ProjectQuery, UpdateStatusReportRequest};
pub use status_report::{split_status_report, StatusReportDraft};
