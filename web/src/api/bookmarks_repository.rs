use http::StatusCode;
use shared_types::{Bookmark, BookmarkOutcome, NewBookmark, NoteUpdate};

use super::client::BackendClient;
use super::error::{ensure_success, ApiResult};

impl BackendClient {
    /// All bookmarks, in the store's order.
    pub async fn list_bookmarks(&self) -> ApiResult<Vec<Bookmark>> {
        let response = self.http.get(self.endpoint("bookmarks")).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    /// Inserts a snapshot. A 409 from the store means the complaint number
    /// is already bookmarked and is reported as a normal outcome.
    pub async fn create_bookmark(&self, bookmark: &NewBookmark) -> ApiResult<BookmarkOutcome> {
        let response = self
            .http
            .post(self.endpoint("bookmarks"))
            .json(bookmark)
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            tracing::info!(cmplnt_num = %bookmark.cmplnt_num, "Incident already bookmarked");
            return Ok(BookmarkOutcome::AlreadyBookmarked);
        }

        let created: Bookmark = ensure_success(response).await?.json().await?;
        tracing::info!(id = %created.id, cmplnt_num = %bookmark.cmplnt_num, "Bookmark created");
        Ok(BookmarkOutcome::Created(created))
    }

    /// Replaces the note and returns the store's updated copy.
    pub async fn update_note(&self, id: &str, notes: String) -> ApiResult<Bookmark> {
        let response = self
            .http
            .put(self.endpoint(&format!("bookmarks/{}", urlencoding::encode(id))))
            .json(&NoteUpdate { notes })
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn delete_bookmark(&self, id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("bookmarks/{}", urlencoding::encode(id))))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
