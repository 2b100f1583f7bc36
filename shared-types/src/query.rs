//! SoQL parameters for the complaint dataset.

use serde::{Deserialize, Serialize};

pub const MAP_LIMIT: u32 = 500;
pub const LIVE_DATA_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 1000;

pub const ORDER_NEWEST_FIRST: &str = "rpt_dt DESC";
pub const WHERE_HAS_COORDINATES: &str = "latitude IS NOT NULL AND longitude IS NOT NULL";

pub const MAP_FIELDS: &[&str] = &[
    "cmplnt_num",
    "boro_nm",
    "rpt_dt",
    "ofns_desc",
    "law_cat_cd",
    "crm_atpt_cptd_cd",
    "prem_typ_desc",
    "loc_of_occur_desc",
    "station_name",
    "hadevelopt",
    "vic_sex",
    "vic_age_group",
    "vic_race",
    "susp_sex",
    "susp_age_group",
    "susp_race",
    "latitude",
    "longitude",
];

pub const LIVE_DATA_FIELDS: &[&str] = &[
    "cmplnt_num",
    "boro_nm",
    "rpt_dt",
    "ofns_desc",
    "law_cat_cd",
    "crm_atpt_cptd_cd",
    "prem_typ_desc",
    "latitude",
    "longitude",
];

/// Which column set a page asks for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Map,
    LiveData,
}

impl Projection {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Projection::Map => MAP_FIELDS,
            Projection::LiveData => LIVE_DATA_FIELDS,
        }
    }
}

/// A fetch window. The limit stays within `1..=MAX_LIMIT` however the query
/// was built, including when it arrives deserialized from a request.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(from = "RequestedQuery")]
pub struct IncidentQuery {
    pub projection: Projection,
    limit: u32,
}

#[derive(Deserialize)]
struct RequestedQuery {
    projection: Projection,
    limit: u32,
}

impl From<RequestedQuery> for IncidentQuery {
    fn from(requested: RequestedQuery) -> Self {
        Self::new(requested.projection, requested.limit)
    }
}

impl IncidentQuery {
    pub fn map() -> Self {
        Self::new(Projection::Map, MAP_LIMIT)
    }

    pub fn live_data() -> Self {
        Self::new(Projection::LiveData, LIVE_DATA_LIMIT)
    }

    /// `limit` is clamped to `1..=MAX_LIMIT`.
    pub fn new(projection: Projection, limit: u32) -> Self {
        Self {
            projection,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("$limit", self.limit.to_string()),
            ("$order", ORDER_NEWEST_FIRST.to_string()),
            ("$where", WHERE_HAS_COORDINATES.to_string()),
            ("$select", self.projection.fields().join(",")),
        ]
    }
}
