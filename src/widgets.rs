//! Small rendering helpers shared by the panes and overlays

pub mod popup;
pub mod scrollbar;
