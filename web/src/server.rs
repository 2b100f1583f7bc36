use leptos::prelude::*;
use leptos::server;
use shared_types::{Comment, Incident, IncidentQuery, NewComment};

#[cfg(feature = "ssr")]
use crate::api::{backend, open_data, ApiError};

#[cfg(feature = "ssr")]
fn to_server_error(context: &str, err: ApiError) -> ServerFnError {
    tracing::error!(error = %err, "{}", context);
    ServerFnError::new(format!("{}: {}", context, err))
}

/// Newest incidents with known coordinates, normalized for display.
#[server]
pub async fn fetch_incidents(query: IncidentQuery) -> Result<Vec<Incident>, ServerFnError> {
    let client = open_data().map_err(|e| to_server_error("Open data client unavailable", e))?;
    client
        .fetch_incidents(&query)
        .await
        .map_err(|e| to_server_error("Failed to fetch crime data", e))
}

#[server]
pub async fn list_comments(area: String) -> Result<Vec<Comment>, ServerFnError> {
    let client = backend().map_err(|e| to_server_error("Backend client unavailable", e))?;
    client
        .list_comments(&area)
        .await
        .map_err(|e| to_server_error("Failed to fetch comments", e))
}

#[server]
pub async fn post_comment(comment: NewComment) -> Result<Comment, ServerFnError> {
    if comment.text.trim().is_empty() {
        return Err(ServerFnError::new("Comment text cannot be empty"));
    }
    let client = backend().map_err(|e| to_server_error("Backend client unavailable", e))?;
    client
        .post_comment(&comment)
        .await
        .map_err(|e| to_server_error("Failed to post comment", e))
}
