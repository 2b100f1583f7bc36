pub mod bookmark_button;
pub mod comment_form;
pub mod error;
pub mod footer;
pub mod loading;
pub mod navbar;

// Re-export commonly used types
pub use bookmark_button::BookmarkButton;
pub use comment_form::CommentForm;
pub use error::ErrorView;
pub use loading::LoadingView;
