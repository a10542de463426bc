pub mod d400_project_summary;

pub use d400_project_summary::ui::ProjectsDashboard;
