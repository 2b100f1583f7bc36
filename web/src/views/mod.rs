pub mod bookmarks;
pub mod home;
pub mod insights;
pub mod live_data;
pub mod map;
pub mod not_found;
