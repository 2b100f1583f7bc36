pub mod comments_panel;
pub mod drop_down_boroughs;
pub mod icon;
pub mod map_marker;
pub mod map_marker_popup;
pub mod map_renderer;
pub mod map_wrapper;
