//! Status report editor shown inside an expanded project card.
//!
//! - view_model.rs: draft state and the save/cancel commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::StatusReportEditor;
pub use view_model::StatusReportViewModel;
