use std::sync::OnceLock;

use reqwest::{Client, Url};

use super::{ApiError, ApiResult, OpenDataClient};
use crate::config::AppConfig;

static CLIENTS: OnceLock<Clients> = OnceLock::new();

struct Clients {
    open_data: OpenDataClient,
    backend: BackendClient,
}

/// Builds the process-wide clients from `config`. Both share one
/// connection pool.
pub fn init_clients(config: &AppConfig) -> ApiResult<()> {
    let http = Client::builder().build()?;

    let clients = Clients {
        open_data: OpenDataClient::new(
            http.clone(),
            &config.open_data_url,
            config.app_token.clone(),
        )?,
        backend: BackendClient::new(http, &config.backend_url)?,
    };

    CLIENTS
        .set(clients)
        .map_err(|_| ApiError::AlreadyInitialized)
}

pub fn open_data() -> ApiResult<&'static OpenDataClient> {
    CLIENTS
        .get()
        .map(|c| &c.open_data)
        .ok_or(ApiError::NotInitialized)
}

pub fn backend() -> ApiResult<&'static BackendClient> {
    CLIENTS
        .get()
        .map(|c| &c.backend)
        .ok_or(ApiError::NotInitialized)
}

pub(crate) fn parse_url(url: &str) -> ApiResult<Url> {
    Url::parse(url).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Client for the bookmark/comment store. Operations live in
/// `bookmarks_repository` and `comments_repository`.
#[derive(Clone, Debug)]
pub struct BackendClient {
    pub(crate) http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: Client, base_url: &str) -> ApiResult<Self> {
        parse_url(base_url)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
