use serde::{Deserialize, Serialize};

pub mod bookmark;
pub mod borough;
pub mod comment;
pub mod incident;
pub mod query;

pub use bookmark::{Bookmark, BookmarkOutcome, NewBookmark, NoteUpdate};
pub use borough::{Borough, BoroughFilter, BoroughParseError};
pub use comment::{Comment, NewComment};
pub use incident::{Demographics, Incident, IncidentRecord};
pub use query::{IncidentQuery, Projection};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

/// Lower Manhattan, where the map opens.
pub const NYC_CENTER: LatLong = LatLong {
    lat: 40.7128,
    long: -74.006,
};
