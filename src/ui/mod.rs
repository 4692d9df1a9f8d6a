pub mod pane;
pub mod panels;
