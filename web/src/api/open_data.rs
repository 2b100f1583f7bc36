//! Socrata client for the NYPD complaint dataset.

use reqwest::Client;
use shared_types::incident::{normalize_all, Incident, IncidentRecord};
use shared_types::IncidentQuery;

use super::client::parse_url;
use super::error::{ensure_success, ApiResult};

pub const APP_TOKEN_HEADER: &str = "X-App-Token";

#[derive(Clone, Debug)]
pub struct OpenDataClient {
    http: Client,
    url: String,
    app_token: Option<String>,
}

impl OpenDataClient {
    pub fn new(http: Client, url: &str, app_token: Option<String>) -> ApiResult<Self> {
        parse_url(url)?;
        Ok(Self {
            http,
            url: url.to_string(),
            app_token,
        })
    }

    /// Raw rows for `query`, newest report first.
    pub async fn fetch_records(&self, query: &IncidentQuery) -> ApiResult<Vec<IncidentRecord>> {
        let mut request = self.http.get(&self.url).query(&query.to_params());
        if let Some(token) = &self.app_token {
            request = request.header(APP_TOKEN_HEADER, token);
        }

        let response = ensure_success(request.send().await?).await?;
        let records: Vec<IncidentRecord> = response.json().await?;

        tracing::debug!(
            limit = query.limit(),
            projection = ?query.projection,
            rows = records.len(),
            "Fetched incident window"
        );
        Ok(records)
    }

    pub async fn fetch_incidents(&self, query: &IncidentQuery) -> ApiResult<Vec<Incident>> {
        let records = self.fetch_records(query).await?;
        let incidents = normalize_all(&records);

        let unmappable = incidents.iter().filter(|i| !i.is_mappable()).count();
        if unmappable > 0 {
            tracing::warn!(unmappable, "Incidents with unparsable coordinates");
        }
        Ok(incidents)
    }
}
