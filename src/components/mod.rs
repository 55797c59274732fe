pub mod detail_panel;
pub mod load_error;
pub mod map_view;
pub mod search_bar;
pub mod tooltip;
