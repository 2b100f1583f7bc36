use serde::{Deserialize, Serialize};

use crate::LatLong;

/// Anonymous note filed under a borough.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub area: String,
    pub text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Comment {
    /// Where selecting the comment should move the map, if anywhere.
    pub fn position(&self) -> Option<LatLong> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(long)) if lat.is_finite() && long.is_finite() => {
                Some(LatLong { lat, long })
            }
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewComment {
    pub area: String,
    pub text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewComment {
    /// Trims the text; blank comments are never sent.
    pub fn new(area: impl Into<String>, text: &str, position: Option<LatLong>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            area: area.into(),
            text: text.to_string(),
            latitude: position.map(|p| p.lat),
            longitude: position.map(|p| p.long),
        })
    }
}
