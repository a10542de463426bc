pub mod dto;
pub mod summary;

pub use dto::*;
pub use summary::{is_overdue, summarize, top_managers};
