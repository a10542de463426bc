pub mod charts;
pub mod panel_card;
pub mod search_bar;
pub mod stat_card;
