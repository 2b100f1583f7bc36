//! Server-side settings, resolved once at startup.

pub const DEFAULT_OPEN_DATA_URL: &str = "https://data.cityofnewyork.us/resource/qb7u-rbmr.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001/api";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Socrata resource endpoint for the complaint dataset.
    pub open_data_url: String,
    /// Sent as `X-App-Token` for the higher Socrata rate limit.
    pub app_token: Option<String>,
    /// Base URL of the bookmark/comment store, e.g. `http://host/api`.
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            open_data_url: non_blank("NYC_OPEN_DATA_URL")
                .unwrap_or_else(|| DEFAULT_OPEN_DATA_URL.to_string()),
            app_token: non_blank("NYC_OPEN_DATA_APP_TOKEN"),
            backend_url: non_blank("BACKEND_API_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        }
    }
}
