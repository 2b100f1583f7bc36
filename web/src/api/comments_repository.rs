use shared_types::{Comment, NewComment};

use super::client::BackendClient;
use super::error::{ensure_success, ApiResult};

impl BackendClient {
    /// Comments filed under `area` (a borough name).
    pub async fn list_comments(&self, area: &str) -> ApiResult<Vec<Comment>> {
        let response = self
            .http
            .get(self.endpoint(&format!("comments/{}", urlencoding::encode(area))))
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn post_comment(&self, comment: &NewComment) -> ApiResult<Comment> {
        let response = self
            .http
            .post(self.endpoint("comments"))
            .json(comment)
            .send()
            .await?;
        let created: Comment = ensure_success(response).await?.json().await?;
        tracing::info!(id = %created.id, area = %created.area, "Comment posted");
        Ok(created)
    }
}
