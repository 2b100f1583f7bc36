//! Bookmark wire types for the external bookmark store.
//!
//! The store speaks camelCase JSON and keys documents by `_id`; the
//! complaint number is unique there, so a second insert of the same
//! incident comes back as a conflict.

use serde::{Deserialize, Serialize};

use crate::incident::{
    or_placeholder, present, report_date, Demographics, Incident, NOT_AVAILABLE, UNKNOWN,
    UNKNOWN_OFFENSE,
};

pub const BOOKMARKED: &str = "Bookmarked successfully!";
pub const ALREADY_BOOKMARKED: &str = "You already bookmarked this.";
pub const BOOKMARK_FAILED: &str = "Failed to bookmark.";
pub const NO_NOTES: &str = "None";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(rename = "_id")]
    pub id: String,
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
    pub pd_desc: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
}

// Stored documents may predate the current snapshot shape, so the card
// re-applies the incident placeholders instead of trusting the store.
impl Bookmark {
    pub fn offense(&self) -> String {
        or_placeholder(self.ofns_desc.as_deref(), UNKNOWN_OFFENSE)
    }

    pub fn law_category(&self) -> String {
        or_placeholder(self.law_cat_cd.as_deref(), NOT_AVAILABLE)
    }

    pub fn status(&self) -> String {
        or_placeholder(self.crm_atpt_cptd_cd.as_deref(), NOT_AVAILABLE)
    }

    pub fn premise(&self) -> String {
        or_placeholder(self.prem_typ_desc.as_deref(), NOT_AVAILABLE)
    }

    pub fn occurrence_location(&self) -> String {
        or_placeholder(self.loc_of_occur_desc.as_deref(), NOT_AVAILABLE)
    }

    pub fn borough(&self) -> String {
        or_placeholder(self.boro_nm.as_deref(), UNKNOWN)
    }

    pub fn report_date(&self) -> String {
        report_date(self.rpt_dt.as_deref()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn station(&self) -> Option<&str> {
        present(self.station_name.as_deref())
    }

    pub fn housing_development(&self) -> Option<&str> {
        present(self.hadevelopt.as_deref())
    }

    pub fn victim(&self) -> Demographics {
        Demographics::new(
            self.vic_sex.as_deref(),
            self.vic_age_group.as_deref(),
            self.vic_race.as_deref(),
        )
    }

    pub fn suspect(&self) -> Demographics {
        Demographics::new(
            self.susp_sex.as_deref(),
            self.susp_age_group.as_deref(),
            self.susp_race.as_deref(),
        )
    }

    pub fn notes(&self) -> &str {
        present(self.notes.as_deref()).unwrap_or(NO_NOTES)
    }

    /// Text loaded into the note editor.
    pub fn editable_notes(&self) -> String {
        self.notes.clone().unwrap_or_default()
    }
}

/// Snapshot posted to `POST /bookmarks`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub cmplnt_num: String,
    pub boro_nm: String,
    pub rpt_dt: String,
    pub ofns_desc: String,
    pub law_cat_cd: String,
    pub crm_atpt_cptd_cd: String,
    pub prem_typ_desc: String,
    pub loc_of_occur_desc: String,
    pub station_name: Option<String>,
    pub hadevelopt: Option<String>,
    pub vic_sex: String,
    pub vic_age_group: String,
    pub vic_race: String,
    pub susp_sex: String,
    pub susp_age_group: String,
    pub susp_race: String,
    pub pd_desc: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: String,
}

impl NewBookmark {
    /// `None` when the incident has no complaint number to dedupe on.
    pub fn from_incident(incident: &Incident) -> Option<Self> {
        let cmplnt_num = incident.complaint_number.clone()?;
        Some(Self {
            cmplnt_num,
            boro_nm: incident.borough.clone(),
            rpt_dt: incident.report_date.clone(),
            ofns_desc: incident.offense.clone(),
            law_cat_cd: incident.law_category.clone(),
            crm_atpt_cptd_cd: incident.status.clone(),
            prem_typ_desc: incident.premise.clone(),
            loc_of_occur_desc: incident.occurrence_location.clone(),
            station_name: incident.station_name.clone(),
            hadevelopt: incident.housing_development.clone(),
            vic_sex: incident.victim.sex.clone(),
            vic_age_group: incident.victim.age_group.clone(),
            vic_race: incident.victim.race.clone(),
            susp_sex: incident.suspect.sex.clone(),
            susp_age_group: incident.suspect.age_group.clone(),
            susp_race: incident.suspect.race.clone(),
            // Not part of the public projection.
            pd_desc: NOT_AVAILABLE.to_string(),
            latitude: incident.position.map(|p| p.lat),
            longitude: incident.position.map(|p| p.long),
            notes: String::new(),
        })
    }
}

/// Partial update body for `PUT /bookmarks/:id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteUpdate {
    pub notes: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum BookmarkOutcome {
    Created(Bookmark),
    AlreadyBookmarked,
}

impl BookmarkOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            BookmarkOutcome::Created(_) => BOOKMARKED,
            BookmarkOutcome::AlreadyBookmarked => ALREADY_BOOKMARKED,
        }
    }
}

/// Swaps in the server's copy of an edited bookmark. Returns false when the
/// id is no longer listed.
pub fn replace_bookmark(bookmarks: &mut [Bookmark], updated: Bookmark) -> bool {
    match bookmarks.iter_mut().find(|b| b.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn remove_bookmark(bookmarks: &mut Vec<Bookmark>, id: &str) -> bool {
    let before = bookmarks.len();
    bookmarks.retain(|b| b.id != id);
    bookmarks.len() != before
}
