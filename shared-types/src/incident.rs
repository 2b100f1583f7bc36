//! Raw open-data rows and the display model the map and lists render.
//!
//! Socrata sends every column as an optional string. [`Incident`] is the
//! normalized form: each display field always holds text, with a fixed
//! placeholder standing in for whatever the dataset left out.

use serde::{Deserialize, Serialize};

use crate::LatLong;

pub const UNKNOWN_OFFENSE: &str = "Unknown Offense";
pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the NYPD complaint dataset, as delivered.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct IncidentRecord {
    pub cmplnt_num: Option<String>,
    pub boro_nm: Option<String>,
    pub rpt_dt: Option<String>,
    pub ofns_desc: Option<String>,
    pub law_cat_cd: Option<String>,
    pub crm_atpt_cptd_cd: Option<String>,
    pub prem_typ_desc: Option<String>,
    pub loc_of_occur_desc: Option<String>,
    pub station_name: Option<String>,
    pub hadevelopt: Option<String>,
    pub vic_sex: Option<String>,
    pub vic_age_group: Option<String>,
    pub vic_race: Option<String>,
    pub susp_sex: Option<String>,
    pub susp_age_group: Option<String>,
    pub susp_race: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Demographics {
    pub sex: String,
    pub age_group: String,
    pub race: String,
}

impl Demographics {
    pub fn new(sex: Option<&str>, age_group: Option<&str>, race: Option<&str>) -> Self {
        Self {
            sex: or_placeholder(sex, UNKNOWN),
            age_group: or_placeholder(age_group, UNKNOWN),
            race: or_placeholder(race, UNKNOWN),
        }
    }

    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.sex, self.age_group, self.race)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Incident {
    /// Stable per-marker identity: the complaint number, or `row-<n>` when
    /// the dataset omitted it.
    pub key: String,
    pub complaint_number: Option<String>,
    pub borough: String,
    pub report_date: String,
    pub offense: String,
    pub law_category: String,
    pub status: String,
    pub premise: String,
    pub occurrence_location: String,
    pub station_name: Option<String>,
    pub housing_development: Option<String>,
    pub victim: Demographics,
    pub suspect: Demographics,
    /// `None` when either coordinate is missing or not a finite number.
    pub position: Option<LatLong>,
}

impl Incident {
    pub fn from_record(index: usize, record: &IncidentRecord) -> Self {
        let complaint_number = present(record.cmplnt_num.as_deref()).map(str::to_string);
        let key = complaint_number
            .clone()
            .unwrap_or_else(|| format!("row-{index}"));

        let position = match (
            parse_coordinate(record.latitude.as_deref()),
            parse_coordinate(record.longitude.as_deref()),
        ) {
            (Some(lat), Some(long)) => Some(LatLong { lat, long }),
            _ => None,
        };

        Self {
            key,
            complaint_number,
            borough: or_placeholder(record.boro_nm.as_deref(), UNKNOWN),
            report_date: report_date(record.rpt_dt.as_deref())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            offense: or_placeholder(record.ofns_desc.as_deref(), UNKNOWN_OFFENSE),
            law_category: or_placeholder(record.law_cat_cd.as_deref(), NOT_AVAILABLE),
            status: or_placeholder(record.crm_atpt_cptd_cd.as_deref(), NOT_AVAILABLE),
            premise: or_placeholder(record.prem_typ_desc.as_deref(), NOT_AVAILABLE),
            occurrence_location: or_placeholder(
                record.loc_of_occur_desc.as_deref(),
                NOT_AVAILABLE,
            ),
            station_name: present(record.station_name.as_deref()).map(str::to_string),
            housing_development: present(record.hadevelopt.as_deref()).map(str::to_string),
            victim: Demographics::new(
                record.vic_sex.as_deref(),
                record.vic_age_group.as_deref(),
                record.vic_race.as_deref(),
            ),
            suspect: Demographics::new(
                record.susp_sex.as_deref(),
                record.susp_age_group.as_deref(),
                record.susp_race.as_deref(),
            ),
            position,
        }
    }

    pub fn is_mappable(&self) -> bool {
        self.position.is_some()
    }

    /// Only incidents carrying a complaint number can be bookmarked, since
    /// the bookmark store dedupes on it.
    pub fn can_bookmark(&self) -> bool {
        self.complaint_number.is_some()
    }
}

/// Normalizes a fetched window, preserving the API's newest-first order.
pub fn normalize_all(records: &[IncidentRecord]) -> Vec<Incident> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Incident::from_record(index, record))
        .collect()
}

/// Trimmed value, treating blank strings as absent.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    present(value).unwrap_or(placeholder).to_string()
}

/// Calendar date part of a Socrata floating timestamp
/// (`2024-03-31T00:00:00.000` -> `2024-03-31`).
pub fn report_date(raw: Option<&str>) -> Option<String> {
    present(raw).map(|v| v.chars().take(10).collect())
}

pub fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    present(raw)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
