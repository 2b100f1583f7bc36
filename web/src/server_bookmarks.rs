use leptos::prelude::*;
use shared_types::{Bookmark, BookmarkOutcome, NewBookmark};

#[cfg(feature = "ssr")]
use crate::api::backend;

#[server]
pub async fn list_bookmarks() -> Result<Vec<Bookmark>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .list_bookmarks()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch bookmarks");
                ServerFnError::new(format!("Failed to fetch bookmarks: {}", e))
            })
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(vec![])
    }
}

/// `Ok(AlreadyBookmarked)` is the duplicate-key case; every other failure
/// comes back as an error.
#[server]
pub async fn create_bookmark(bookmark: NewBookmark) -> Result<BookmarkOutcome, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .create_bookmark(&bookmark)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, cmplnt_num = %bookmark.cmplnt_num, "Failed to bookmark");
                ServerFnError::new(format!("Failed to bookmark: {}", e))
            })
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = bookmark;
        Err(ServerFnError::new("Bookmarks are only available on the server"))
    }
}

#[server]
pub async fn update_bookmark_note(id: String, notes: String) -> Result<Bookmark, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .update_note(&id, notes)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %id, "Error updating note");
                ServerFnError::new(format!("Failed to update note: {}", e))
            })
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (id, notes);
        Err(ServerFnError::new("Bookmarks are only available on the server"))
    }
}

#[server]
pub async fn delete_bookmark(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .delete_bookmark(&id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %id, "Error deleting bookmark");
                ServerFnError::new(format!("Failed to delete bookmark: {}", e))
            })
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = id;
        Err(ServerFnError::new("Bookmarks are only available on the server"))
    }
}
